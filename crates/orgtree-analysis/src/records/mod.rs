//! Raw organization records as handed over by the JSON decoder.

pub mod types;

pub use types::{ExternalIdEntry, OrganizationRecord, RecordPage, RelationshipEntry};
