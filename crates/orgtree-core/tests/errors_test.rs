//! Tests for the orgtree error handling system.

use orgtree_core::errors::error_code::{self, OrgtreeErrorCode};
use orgtree_core::errors::*;

#[test]
fn test_all_errors_have_error_code() {
    let config = ConfigError::FileNotFound { path: "x".into() };
    assert_eq!(config.error_code(), error_code::CONFIG_ERROR);

    let record = RecordError::Unreadable {
        source_name: "dump.json".into(),
        message: "denied".into(),
    };
    assert_eq!(record.error_code(), error_code::RECORD_ERROR);

    let storage = StorageError::Io {
        path: "data/hierarchy.json".into(),
        message: "disk full".into(),
    };
    assert_eq!(storage.error_code(), error_code::STORAGE_ERROR);

    let missing = StorageError::MissingArtifact { path: "data/funders.json".into() };
    assert_eq!(missing.error_code(), error_code::MISSING_ARTIFACT);

    let lookup = LookupError::UnknownAlias { input: "1000".into() };
    assert_eq!(lookup.error_code(), error_code::NOT_FOUND);
}

#[test]
fn test_pipeline_error_delegates_code() {
    let err: PipelineError = RecordError::Malformed {
        source_name: "dump.json".into(),
        line: 3,
        column: 7,
        message: "expected value".into(),
    }
    .into();
    assert_eq!(err.error_code(), error_code::RECORD_ERROR);

    let err: PipelineError = StorageError::MissingArtifact { path: "p".into() }.into();
    assert_eq!(err.error_code(), error_code::MISSING_ARTIFACT);
}

#[test]
fn test_diagnostic_format() {
    let err = RecordError::Malformed {
        source_name: "dump.json".into(),
        line: 3,
        column: 7,
        message: "expected value".into(),
    };
    let diag = err.diagnostic();
    assert!(diag.starts_with("[RECORD_ERROR] "), "got {diag}");
    assert!(diag.contains("line 3, column 7"));
}

#[test]
fn test_lookup_error_resolved_id() {
    let unknown = LookupError::UnknownAlias { input: "42".into() };
    assert_eq!(unknown.resolved_id(), None);

    let absent = LookupError::NotIndexed { org_id: "https://ror.org/0abc".into() };
    assert_eq!(absent.resolved_id(), Some("https://ror.org/0abc"));
}
