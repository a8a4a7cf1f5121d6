//! Error handling for orgtree.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod lookup_error;
pub mod pipeline_error;
pub mod record_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use error_code::OrgtreeErrorCode;
pub use lookup_error::LookupError;
pub use pipeline_error::PipelineError;
pub use record_error::RecordError;
pub use storage_error::StorageError;
