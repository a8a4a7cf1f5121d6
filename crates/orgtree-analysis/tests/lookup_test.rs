//! Point queries through `LookupService`.

use orgtree_analysis::funders::FunderMap;
use orgtree_analysis::index::{ClosureEntry, HierarchyIndex, KnownIds};
use orgtree_analysis::lookup::{LookupService, LookupStatus, QueryResult};
use orgtree_core::errors::LookupError;

const PREFIX: &str = "org:";

fn entry(ancestors: &[&str], descendants: &[&str]) -> ClosureEntry {
    ClosureEntry::new(
        ancestors.iter().map(|s| s.to_string()).collect(),
        descendants.iter().map(|s| s.to_string()).collect(),
    )
}

/// org:X is a child of org:P; org:L has no relationships at all.
fn make_service() -> LookupService {
    let mut index = HierarchyIndex::new();
    index.insert("org:X", entry(&["org:P"], &[]));
    index.insert("org:P", entry(&[], &["org:X"]));

    let funders: FunderMap = [
        ("1000".to_string(), "org:X".to_string()),
        ("2000".to_string(), "org:L".to_string()),
    ]
    .into_iter()
    .collect();

    LookupService::new(PREFIX, funders, index)
}

fn with_known(service: LookupService) -> LookupService {
    let known: KnownIds = ["org:X", "org:P", "org:L"]
        .into_iter()
        .map(String::from)
        .collect();
    service.with_known_ids(known)
}

#[test]
fn test_query_canonical_id() {
    let service = make_service();
    let result = service.query("org:X").unwrap();
    assert_eq!(
        result,
        QueryResult {
            org_id: "org:X".into(),
            input_id: "org:X".into(),
            ancestors: vec!["org:P".into()],
            descendants: vec![],
        }
    );
}

#[test]
fn test_query_funder_alias_keeps_input() {
    let service = make_service();
    let result = service.query("1000").unwrap();
    assert_eq!(result.org_id, "org:X");
    assert_eq!(result.input_id, "1000");
    assert_eq!(result.ancestors, vec!["org:P"]);
}

#[test]
fn test_unknown_alias_is_not_found() {
    let service = make_service();
    assert_eq!(
        service.query("9999"),
        Err(LookupError::UnknownAlias {
            input: "9999".into()
        })
    );
}

#[test]
fn test_unindexed_canonical_is_not_found() {
    let service = make_service();
    let err = service.query("org:nobody").unwrap_err();
    assert_eq!(
        err,
        LookupError::NotIndexed {
            org_id: "org:nobody".into()
        }
    );
    assert_eq!(err.resolved_id(), Some("org:nobody"));
}

#[test]
fn test_alias_to_unindexed_org_is_not_found() {
    let service = make_service();
    let err = service.query("2000").unwrap_err();
    assert_eq!(
        err,
        LookupError::NotIndexed {
            org_id: "org:L".into()
        }
    );
}

#[test]
fn test_partial_accessors() {
    let service = make_service();
    assert_eq!(service.ancestors_of("org:X").unwrap(), ["org:P".to_string()]);
    assert!(service.descendants_of("org:X").unwrap().is_empty());
    assert_eq!(service.descendants_of("org:P").unwrap(), ["org:X".to_string()]);
    assert!(service.ancestors_of("9999").is_err());
}

#[test]
fn test_has_helpers() {
    let service = make_service();
    assert!(service.has_ancestors("org:X"));
    assert!(!service.has_descendants("org:X"));
    assert!(service.has_descendants("org:P"));
    assert!(service.has_ancestors("1000"));

    // Not found reads as false rather than an error.
    assert!(!service.has_ancestors("9999"));
    assert!(!service.has_descendants("org:nobody"));
}

#[test]
fn test_status_without_known_ids() {
    let service = make_service();
    assert_eq!(service.status("org:X"), LookupStatus::Indexed);
    assert_eq!(service.status("1000"), LookupStatus::Indexed);
    assert_eq!(service.status("org:L"), LookupStatus::NotFound);
    assert_eq!(service.status("9999"), LookupStatus::NotFound);
}

#[test]
fn test_status_with_known_ids() {
    let service = with_known(make_service());
    assert_eq!(service.status("org:X"), LookupStatus::Indexed);
    assert_eq!(service.status("org:L"), LookupStatus::KnownWithoutRelationships);
    assert_eq!(service.status("2000"), LookupStatus::KnownWithoutRelationships);
    assert_eq!(service.status("org:nobody"), LookupStatus::NotFound);
    assert_eq!(service.status("9999"), LookupStatus::NotFound);

    // Known ids never change what `query` reports.
    assert!(service.query("org:L").is_err());
}

#[test]
fn test_resolve_passthrough() {
    let service = make_service();
    assert_eq!(service.resolve("org:anything"), Ok("org:anything"));
    assert_eq!(service.resolve("1000"), Ok("org:X"));
}

#[test]
fn test_query_result_json_shape() {
    let service = make_service();
    let value = serde_json::to_value(service.query("1000").unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "orgId": "org:X",
            "inputId": "1000",
            "ancestors": ["org:P"],
            "descendants": []
        })
    );
}

#[test]
fn test_status_display() {
    assert_eq!(LookupStatus::Indexed.to_string(), "indexed");
    assert_eq!(
        LookupStatus::KnownWithoutRelationships.to_string(),
        "known-without-relationships"
    );
    assert_eq!(
        serde_json::to_value(LookupStatus::NotFound).unwrap(),
        serde_json::json!("not-found")
    );
}

#[test]
fn test_service_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LookupService>();

    let service = std::sync::Arc::new(make_service());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let service = std::sync::Arc::clone(&service);
            std::thread::spawn(move || service.query("1000").map(|r| r.org_id))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ok("org:X".to_string()));
    }
}
