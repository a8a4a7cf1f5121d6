//! Record stream loading.

use std::fs;
use std::path::Path;

use orgtree_analysis::records::{OrganizationRecord, RecordPage};
use orgtree_core::errors::RecordError;
use tracing::info;

/// Decode a registry dump into records, preserving file order.
///
/// Accepts either a bare JSON array of records or an API page object
/// with the records under `items`.
pub fn load_records(path: &Path) -> Result<Vec<OrganizationRecord>, RecordError> {
    let source_name = path.display().to_string();
    let bytes = fs::read(path).map_err(|e| RecordError::Unreadable {
        source_name: source_name.clone(),
        message: e.to_string(),
    })?;

    let records = decode_records(&bytes, &source_name)?;
    info!(source = %source_name, records = records.len(), "records loaded");
    Ok(records)
}

/// Decode an in-memory record stream. `source_name` only labels errors.
pub fn decode_records(bytes: &[u8], source_name: &str) -> Result<Vec<OrganizationRecord>, RecordError> {
    let malformed = |e: serde_json::Error| RecordError::Malformed {
        source_name: source_name.to_string(),
        line: e.line(),
        column: e.column(),
        message: e.to_string(),
    };

    match bytes.iter().find(|b| !b.is_ascii_whitespace()) {
        Some(b'{') => serde_json::from_slice::<RecordPage>(bytes)
            .map(|page| page.items)
            .map_err(malformed),
        _ => serde_json::from_slice::<Vec<OrganizationRecord>>(bytes).map_err(malformed),
    }
}
