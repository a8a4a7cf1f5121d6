//! Record stream errors. Always fatal for a build.

use super::error_code::{self, OrgtreeErrorCode};

/// Errors raised while decoding the organization record stream.
///
/// Individual records with gaps (no id, unknown relationship types) are
/// not errors; only an unparsable stream is.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("Cannot read record stream {source_name}: {message}")]
    Unreadable { source_name: String, message: String },

    #[error("Malformed record stream {source_name} at line {line}, column {column}: {message}")]
    Malformed {
        source_name: String,
        line: usize,
        column: usize,
        message: String,
    },
}

impl OrgtreeErrorCode for RecordError {
    fn error_code(&self) -> &'static str {
        error_code::RECORD_ERROR
    }
}
