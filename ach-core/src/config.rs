//! Originator configuration
//!
//! Identity of the originating company and its bank relationship: the fields
//! that land in the file header, the batch defaults, and where generated
//! files go. Loadable from a TOML file with environment-variable overrides.

use crate::file::FileSpec;
use crate::types::EntryClassCode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Originator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OriginatorConfig {
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

    /// Company identification used by batches unless overridden
    pub company_identification: String,

    /// Originating DFI identification (8 digits)
    pub originating_dfi: String,

    /// Default standard entry class code
    pub entry_class: EntryClassCode,

    /// Default company entry description
    pub entry_description: String,

    /// Output directory for generated files
    pub output_dir: PathBuf,
}

impl Default for OriginatorConfig {
    fn default() -> Self {
        Self {
            immediate_destination: String::new(),
            immediate_origin: String::new(),
            destination_name: String::new(),
            origin_name: String::new(),
            reference_code: String::new(),
            company_identification: String::new(),
            originating_dfi: String::new(),
            entry_class: EntryClassCode::Ppd,
            entry_description: "PAYMENTS".to_string(),
            output_dir: PathBuf::from("./out/ach"),
        }
    }
}

impl OriginatorConfig {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: OriginatorConfig = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Load from environment variables, on top of the defaults
    pub fn from_env() -> crate::Result<Self> {
        let mut config = OriginatorConfig::default();

        if let Ok(destination) = std::env::var("ACH_IMMEDIATE_DESTINATION") {
            config.immediate_destination = destination;
        }

        if let Ok(origin) = std::env::var("ACH_IMMEDIATE_ORIGIN") {
            config.immediate_origin = origin;
        }

        if let Ok(company) = std::env::var("ACH_COMPANY_IDENTIFICATION") {
            config.company_identification = company;
        }

        if let Ok(dfi) = std::env::var("ACH_ORIGINATING_DFI") {
            config.originating_dfi = dfi;
        }

        if let Ok(dir) = std::env::var("ACH_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    /// File identity derived from this configuration.
    pub fn file_spec(&self) -> FileSpec {
        FileSpec {
            immediate_destination: self.immediate_destination.clone(),
            immediate_origin: self.immediate_origin.clone(),
            destination_name: self.destination_name.clone(),
            origin_name: self.origin_name.clone(),
            reference_code: self.reference_code.clone(),
            company_identification: self.company_identification.clone(),
            entry_class: self.entry_class,
            entry_description: self.entry_description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OriginatorConfig::default();
        assert_eq!(config.entry_class, EntryClassCode::Ppd);
        assert_eq!(config.entry_description, "PAYMENTS");
        assert_eq!(config.output_dir, PathBuf::from("./out/ach"));
    }

    #[test]
    fn test_parse_toml_config() {
        let toml = r#"
            immediate_destination = "123456789"
            immediate_origin = "1232789456"
            destination_name = "IronBank"
            origin_name = "AryaStark"
            reference_code = "ETOOREAL"
            company_identification = "1232789456"
            originating_dfi = "19283746"
            entry_class = "Ppd"
            entry_description = "TestPay"
            output_dir = "/tmp/ach"
        "#;

        let config: OriginatorConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.immediate_destination, "123456789");
        assert_eq!(config.originating_dfi, "19283746");
        assert_eq!(config.entry_class, EntryClassCode::Ppd);

        let spec = config.file_spec();
        assert_eq!(spec.destination_name, "IronBank");
        assert_eq!(spec.entry_description, "TestPay");
    }
}
