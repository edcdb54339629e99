//! Error types for ACH file generation

use thiserror::Error;

/// Result type for ACH operations
pub type Result<T> = std::result::Result<T, Error>;

/// ACH file generation errors
///
/// Field encoding never errors (out-of-range values are silently truncated
/// or blanked by design); the variants here cover structural misuse of the
/// aggregates, configuration, and I/O.
#[derive(Error, Debug)]
pub enum Error {
    /// Entry appended to a batch that was already finalized
    #[error("Batch {0} is finalized and accepts no more entries")]
    BatchSealed(u32),

    /// Control record requested before the batch was finalized
    #[error("Batch {0} has not been finalized")]
    NotFinalized(u32),

    /// Batch or entry appended to a file that was already rendered
    #[error("File is sealed; no batches or entries may be added after save")]
    FileSealed,

    /// Unknown batch id
    #[error("Batch {0} not found in file")]
    BatchNotFound(usize),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}
