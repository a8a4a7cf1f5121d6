//! Pipeline errors.

use super::error_code::OrgtreeErrorCode;
use super::{ConfigError, RecordError, StorageError};

/// Errors that abort a batch build or a snapshot load.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl OrgtreeErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Record(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
        }
    }
}
