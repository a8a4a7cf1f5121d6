//! Artifact persistence errors.

use super::error_code::{self, OrgtreeErrorCode};

/// Errors that can occur while writing or loading persisted artifacts.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to encode {path}: {message}")]
    Serialize { path: String, message: String },

    #[error("Failed to decode {path}: {message}")]
    Deserialize { path: String, message: String },

    #[error("Required artifact missing: {path}")]
    MissingArtifact { path: String },
}

impl OrgtreeErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingArtifact { .. } => error_code::MISSING_ARTIFACT,
            _ => error_code::STORAGE_ERROR,
        }
    }
}
