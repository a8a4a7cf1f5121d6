//! Point queries against a loaded hierarchy index.

pub mod service;
pub mod types;

pub use service::LookupService;
pub use types::{LookupStatus, QueryResult};
