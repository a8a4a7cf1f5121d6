//! Funder alias map construction and identifier resolution.

use orgtree_analysis::funders::{FunderMap, FunderMapBuilder, FunderResolver};
use orgtree_analysis::records::{ExternalIdEntry, OrganizationRecord};
use orgtree_core::errors::LookupError;

const PREFIX: &str = "https://ror.org/";

fn ext(kind: &str, all: &[&str], preferred: Option<&str>) -> ExternalIdEntry {
    ExternalIdEntry {
        kind: kind.to_string(),
        all: all.iter().map(|s| s.to_string()).collect(),
        preferred: preferred.map(str::to_string),
    }
}

fn make_record(id: Option<&str>, external_ids: Vec<ExternalIdEntry>) -> OrganizationRecord {
    OrganizationRecord {
        id: id.map(str::to_string),
        relationships: Vec::new(),
        external_ids,
    }
}

#[test]
fn test_fundref_all_and_preferred_registered() {
    let records = vec![make_record(
        Some("https://ror.org/0x"),
        vec![ext("fundref", &["100", "200"], Some("300"))],
    )];
    let (map, stats) = FunderMapBuilder::from_records(&records);

    assert_eq!(map.len(), 3);
    for alias in ["100", "200", "300"] {
        assert_eq!(map.get(alias), Some("https://ror.org/0x"));
    }
    assert_eq!(stats.collisions, 0);
}

#[test]
fn test_other_external_id_types_ignored() {
    let records = vec![make_record(
        Some("https://ror.org/0x"),
        vec![
            ext("grid", &["grid.1"], Some("grid.1")),
            ext("isni", &["0000 0001"], None),
            ext("FundRef", &["500"], None),
        ],
    )];
    let (map, _) = FunderMapBuilder::from_records(&records);
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("500"), Some("https://ror.org/0x"));
}

#[test]
fn test_last_write_wins_on_collision() {
    let records = vec![
        make_record(Some("https://ror.org/first"), vec![ext("fundref", &["100"], None)]),
        make_record(Some("https://ror.org/second"), vec![ext("fundref", &["100"], None)]),
    ];
    let (map, stats) = FunderMapBuilder::from_records(&records);

    assert_eq!(map.get("100"), Some("https://ror.org/second"));
    assert_eq!(stats.collisions, 1);
}

#[test]
fn test_reregistering_same_target_is_not_a_collision() {
    let records = vec![make_record(
        Some("https://ror.org/0x"),
        vec![
            ext("fundref", &["100"], None),
            ext("fundref", &["100"], Some("100")),
        ],
    )];
    let (_, stats) = FunderMapBuilder::from_records(&records);
    assert_eq!(stats.collisions, 0);
}

#[test]
fn test_record_without_id_registers_nothing() {
    let records = vec![make_record(None, vec![ext("fundref", &["100"], None)])];
    let (map, _) = FunderMapBuilder::from_records(&records);
    assert!(map.is_empty());
}

#[test]
fn test_resolver_passes_canonical_through() {
    let resolver = FunderResolver::new(PREFIX, FunderMap::new());
    assert_eq!(
        resolver.resolve("https://ror.org/unlisted").unwrap(),
        "https://ror.org/unlisted"
    );
}

#[test]
fn test_resolver_maps_alias() {
    let map: FunderMap = [("1000".to_string(), "https://ror.org/0x".to_string())]
        .into_iter()
        .collect();
    let resolver = FunderResolver::new(PREFIX, map);
    assert_eq!(resolver.resolve("1000").unwrap(), "https://ror.org/0x");
}

#[test]
fn test_resolver_unknown_alias() {
    let resolver = FunderResolver::new(PREFIX, FunderMap::new());
    assert_eq!(
        resolver.resolve("9999"),
        Err(LookupError::UnknownAlias { input: "9999".to_string() })
    );
    // Prefix match is exact, not case-folded.
    assert!(resolver.resolve("HTTPS://ROR.ORG/0x").is_err());
}
