//! File aggregate and assembler
//!
//! [`AchFile`] is the top-level aggregate: it owns the batches, the
//! file-scoped entry sequence, the file ID modifier, and the injected
//! holiday calendar. Saving finalizes every batch in insertion order,
//! computes the file-level control totals, pads the output to whole blocks
//! of ten lines, and streams every record in the mandated order.

use crate::batch::{Batch, BatchDefaults, BatchSpec};
use crate::entry::{Entry, EntrySpec};
use crate::error::{Error, Result};
use crate::layout;
use crate::records::{FileControl, FileHeader};
use crate::schedule::{HolidayCalendar, NoHolidays};
use crate::types::{EntryClassCode, EntrySequence};
use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Identity fields of a new file, plus the defaults inherited by batches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileSpec {
    /// Immediate destination routing number
    pub immediate_destination: String,

    /// Immediate origin identification
    pub immediate_origin: String,

    /// Immediate destination name
    pub destination_name: String,

    /// Immediate origin name
    pub origin_name: String,

    /// Reference code
    pub reference_code: String,

    /// Default company identification for batches
    pub company_identification: String,

    /// Default standard entry class code for batches
    pub entry_class: EntryClassCode,

    /// Default company entry description for batches
    pub entry_description: String,
}

/// Handle to a batch within its file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchId(usize);

/// The top-level file aggregate.
pub struct AchFile {
    header: FileHeader,
    defaults: BatchDefaults,
    batches: Vec<Batch>,
    sequence: EntrySequence,
    calendar: Box<dyn HolidayCalendar>,
    sealed: bool,
}

impl AchFile {
    /// Create a file stamped with the local wall clock and no holidays.
    pub fn new(spec: FileSpec) -> Self {
        Self::with_calendar(spec, Local::now().naive_local(), Box::new(NoHolidays))
    }

    /// Create a file with an explicit creation timestamp and holiday
    /// calendar. The creation date is the reference "today" for every
    /// batch's effective-entry-date computation.
    pub fn with_calendar(
        spec: FileSpec,
        creation: NaiveDateTime,
        calendar: Box<dyn HolidayCalendar>,
    ) -> Self {
        Self {
            header: FileHeader {
                immediate_destination: spec.immediate_destination,
                immediate_origin: spec.immediate_origin,
                destination_name: spec.destination_name,
                origin_name: spec.origin_name,
                reference_code: spec.reference_code,
                creation,
                file_id_modifier: 'A',
            },
            defaults: BatchDefaults {
                company_identification: spec.company_identification,
                entry_class: spec.entry_class,
                entry_description: spec.entry_description,
            },
            batches: Vec::new(),
            sequence: EntrySequence::new(),
            calendar,
            sealed: false,
        }
    }

    /// Current file ID modifier letter.
    pub fn file_id_modifier(&self) -> char {
        self.header.file_id_modifier
    }

    /// Advance the file ID modifier for the next file of the day, A through
    /// Z and wrapping back to A. An explicit operation: `generate` never
    /// mutates the letter.
    pub fn advance_file_id_modifier(&mut self) -> char {
        let next = match self.header.file_id_modifier {
            'Z' => 'A',
            c => (c as u8 + 1) as char,
        };
        self.header.file_id_modifier = next;
        next
    }

    /// Append a batch; its number is dense from 1 in creation order and its
    /// effective entry date is computed now from the settlement delay.
    pub fn new_batch(&mut self, spec: BatchSpec) -> Result<BatchId> {
        if self.sealed {
            return Err(Error::FileSealed);
        }
        let batch_number = self.batches.len() as u32 + 1;
        let batch = Batch::new(
            spec,
            &self.defaults,
            batch_number,
            self.header.creation.date(),
            self.calendar.as_ref(),
        );
        self.batches.push(batch);
        Ok(BatchId(self.batches.len() - 1))
    }

    /// Append an entry to a batch, drawing the next file-scoped sequence
    /// number. The returned entry accepts addenda.
    pub fn add_entry(&mut self, batch: BatchId, spec: EntrySpec) -> Result<&mut Entry> {
        if self.sealed {
            return Err(Error::FileSealed);
        }
        let target = self
            .batches
            .get_mut(batch.0)
            .ok_or(Error::BatchNotFound(batch.0))?;
        if target.is_finalized() {
            return Err(Error::BatchSealed(target.batch_number()));
        }
        let sequence_number = self.sequence.next_id();
        target.push_entry(spec, sequence_number)
    }

    /// Batch by id.
    pub fn batch(&self, batch: BatchId) -> Option<&Batch> {
        self.batches.get(batch.0)
    }

    /// Batches in creation (= batch number) order.
    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    /// Number of batches.
    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    /// Detail count across all batches, addenda included.
    pub fn entry_count(&self) -> usize {
        self.batches.iter().map(Batch::entry_count).sum()
    }

    /// True when any batch carries at least one entry.
    pub fn has_payments(&self) -> bool {
        self.batches.iter().any(|batch| !batch.entries().is_empty())
    }

    /// Total debit amount across all batches.
    pub fn total_debit_amount(&self) -> Decimal {
        self.batches.iter().map(Batch::total_debit_amount).sum()
    }

    /// Total credit amount across all batches.
    pub fn total_credit_amount(&self) -> Decimal {
        self.batches.iter().map(Batch::total_credit_amount).sum()
    }

    /// File-wide entry hash: sum of the batch entry hashes. The wire field
    /// keeps the last ten decimal digits.
    pub fn entry_hash(&self) -> u64 {
        self.batches.iter().map(Batch::entry_hash).sum()
    }

    /// Physical lines before block padding: file header and control plus,
    /// per batch, header and control around its detail records.
    fn raw_line_count(&self) -> usize {
        2 + self
            .batches
            .iter()
            .map(|batch| 2 + batch.entry_count())
            .sum::<usize>()
    }

    /// Number of 10-line blocks the padded file occupies.
    pub fn block_count(&self) -> usize {
        self.raw_line_count().div_ceil(layout::BLOCKING_FACTOR)
    }

    /// Finalize every batch, seal the file, and produce the full record
    /// sequence, block padding included. Idempotent: repeated calls on
    /// unchanged state yield identical lines.
    pub fn render(&mut self) -> Result<Vec<String>> {
        for batch in &mut self.batches {
            batch.finalize();
        }
        self.sealed = true;

        let raw = self.raw_line_count();
        let filler =
            (layout::BLOCKING_FACTOR - raw % layout::BLOCKING_FACTOR) % layout::BLOCKING_FACTOR;

        let control = FileControl {
            batch_count: self.batch_count(),
            block_count: self.block_count(),
            entry_count: self.entry_count(),
            entry_hash: self.entry_hash(),
            total_debit_amount: self.total_debit_amount(),
            total_credit_amount: self.total_credit_amount(),
        };

        let mut lines = Vec::with_capacity(raw + filler);
        lines.push(self.header.generate());
        for batch in &self.batches {
            lines.push(batch.generate_header());
            for entry in batch.entries() {
                lines.push(entry.generate());
                for addenda in entry.addenda() {
                    lines.push(addenda.generate());
                }
            }
            lines.push(batch.generate_control()?);
        }
        lines.push(control.generate());
        for _ in 0..filler {
            lines.push(layout::FILLER_CHAR.to_string().repeat(layout::RECORD_WIDTH));
        }
        Ok(lines)
    }

    /// Render and write the file, creating the destination directory if
    /// absent. Lines are LF-terminated; write failures propagate unmodified.
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let lines = self.render()?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut contents = String::with_capacity(lines.len() * (layout::RECORD_WIDTH + 1));
        for line in &lines {
            contents.push_str(line);
            contents.push('\n');
        }
        std::fs::write(path, contents)?;

        tracing::info!(
            "Wrote ACH file {} ({} lines, {} batches, {} entries)",
            path.display(),
            lines.len(),
            self.batch_count(),
            self.entry_count()
        );
        Ok(())
    }
}

impl std::fmt::Debug for AchFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AchFile")
            .field("header", &self.header)
            .field("batches", &self.batches.len())
            .field("sealed", &self.sealed)
            .finish()
    }
}
