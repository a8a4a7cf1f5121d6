//! orgtree-core: foundation for the organization hierarchy engine.
//!
//! - Types: interned organization keys and collection aliases
//! - Errors: one `thiserror` enum per subsystem
//! - Config: TOML-based, layered resolution
//! - Tracing: `ORGTREE_LOG`-driven subscriber setup
//! - Constants: defaults and artifact names

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::OrgtreeConfig;
pub use errors::{ConfigError, LookupError, PipelineError, RecordError, StorageError};
