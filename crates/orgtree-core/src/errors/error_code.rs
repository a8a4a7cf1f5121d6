//! OrgtreeErrorCode trait for CLI diagnostics.

/// Trait for mapping orgtree errors to stable error code strings.
/// Every error enum implements this so callers can branch on a code
/// instead of matching on message text.
pub trait OrgtreeErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted diagnostic string: `[ERROR_CODE] message`.
    fn diagnostic(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const RECORD_ERROR: &str = "RECORD_ERROR";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const MISSING_ARTIFACT: &str = "MISSING_ARTIFACT";
pub const NOT_FOUND: &str = "NOT_FOUND";
