//! ACH file generator binary
//!
//! Environment-driven: reads originator configuration (`ACH_CONFIG` TOML
//! path, or `ACH_*` variable overrides) and a JSON payment manifest
//! (`ACH_PAYMENTS`), then builds and saves one NACHA file into the
//! configured output directory.

use ach_core::{AchFile, AddendaType, BatchSpec, EntryClassCode, EntrySpec, NoHolidays, OriginatorConfig};
use chrono::Local;
use serde::Deserialize;

/// Payment manifest: the batches and entries to emit.
#[derive(Debug, Deserialize)]
struct Manifest {
    batches: Vec<ManifestBatch>,
}

#[derive(Debug, Deserialize)]
struct ManifestBatch {
    #[serde(flatten)]
    spec: BatchSpec,
    entries: Vec<ManifestEntry>,
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    #[serde(flatten)]
    spec: EntrySpec,
    #[serde(default)]
    addenda: Vec<String>,
}

/// Addenda type implied by the batch's entry class.
fn addenda_type_for(class: EntryClassCode) -> AddendaType {
    match class {
        EntryClassCode::Pos => AddendaType::Pos,
        EntryClassCode::Mte => AddendaType::Mte,
        EntryClassCode::Shr => AddendaType::Shr,
        EntryClassCode::Ccd => AddendaType::Ccd,
        EntryClassCode::Ctx => AddendaType::Ctx,
        _ => AddendaType::Ppd,
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Load configuration
    let config = match std::env::var("ACH_CONFIG") {
        Ok(path) => OriginatorConfig::from_file(path)?,
        Err(_) => OriginatorConfig::from_env()?,
    };

    let manifest_path = std::env::var("ACH_PAYMENTS")
        .map_err(|_| anyhow::anyhow!("ACH_PAYMENTS must point to a payment manifest"))?;
    let manifest: Manifest = serde_json::from_str(&std::fs::read_to_string(&manifest_path)?)?;
    tracing::info!(
        "Loaded {} batches from {}",
        manifest.batches.len(),
        manifest_path
    );

    let now = Local::now().naive_local();
    let mut file = AchFile::with_calendar(config.file_spec(), now, Box::new(NoHolidays));

    for mut manifest_batch in manifest.batches {
        if manifest_batch.spec.originating_dfi.is_empty() {
            manifest_batch.spec.originating_dfi = config.originating_dfi.clone();
        }
        let class = manifest_batch
            .spec
            .entry_class
            .unwrap_or(config.entry_class);
        let batch = file.new_batch(manifest_batch.spec)?;
        for manifest_entry in manifest_batch.entries {
            let entry = file.add_entry(batch, manifest_entry.spec)?;
            for payload in manifest_entry.addenda {
                entry.push_addenda(payload, addenda_type_for(class));
            }
        }
    }

    let filename = format!("ACH-{}.txt", now.format("%Y%m%d-%H%M%S"));
    let path = config.output_dir.join(filename);
    file.save(&path)?;

    tracing::info!(
        "Generated {} ({} batches, {} detail records, debits {}, credits {})",
        path.display(),
        file.batch_count(),
        file.entry_count(),
        file.total_debit_amount(),
        file.total_credit_amount()
    );

    Ok(())
}
