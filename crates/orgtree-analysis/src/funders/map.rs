//! Flat alias → canonical id map built from `fundref` external ids.

use orgtree_core::constants::FUNDREF_TYPE;
use orgtree_core::types::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::records::{ExternalIdEntry, OrganizationRecord};

/// Alias id → canonical organization id.
///
/// Serialized as a flat JSON object, keys in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FunderMap {
    entries: BTreeMap<String, String>,
}

impl FunderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `alias` for `canonical`, returning the previous target if any.
    pub fn insert(&mut self, alias: impl Into<String>, canonical: impl Into<String>) -> Option<String> {
        self.entries.insert(alias.into(), canonical.into())
    }

    pub fn get(&self, alias: &str) -> Option<&str> {
        self.entries.get(alias).map(String::as_str)
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.entries.contains_key(alias)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(alias, canonical)` pairs in alias order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(a, c)| (a.as_str(), c.as_str()))
    }
}

impl FromIterator<(String, String)> for FunderMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Counters from a funder map build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunderMapStats {
    /// Alias registrations performed, overwrites included.
    pub registrations: usize,
    /// Registrations that replaced an alias pointing at a different organization.
    pub collisions: usize,
}

/// Incremental builder fed one record at a time.
///
/// Collisions are last-write-wins in record order: the record processed
/// later owns the alias. Collisions are counted, never rejected.
#[derive(Debug, Default)]
pub struct FunderMapBuilder {
    map: FunderMap,
    stats: FunderMapStats,
}

impl FunderMapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from a full record sequence.
    pub fn from_records(records: &[OrganizationRecord]) -> (FunderMap, FunderMapStats) {
        let mut builder = Self::new();
        for record in records {
            builder.ingest(record);
        }
        builder.finish()
    }

    /// Register every fundref alias of one record.
    pub fn ingest(&mut self, record: &OrganizationRecord) {
        let Some(canonical) = record.canonical_id() else {
            return;
        };

        for entry in &record.external_ids {
            if !entry.kind.eq_ignore_ascii_case(FUNDREF_TYPE) {
                continue;
            }
            for alias in entry_aliases(entry) {
                self.stats.registrations += 1;
                if let Some(previous) = self.map.insert(alias, canonical) {
                    if previous != canonical {
                        self.stats.collisions += 1;
                        debug!(alias, previous = %previous, winner = canonical, "funder alias reassigned");
                    }
                }
            }
        }
    }

    pub fn finish(self) -> (FunderMap, FunderMapStats) {
        (self.map, self.stats)
    }
}

/// `all` plus `preferred`, deduplicated within the entry, first occurrence kept.
fn entry_aliases(entry: &ExternalIdEntry) -> Vec<&str> {
    let mut aliases: Vec<&str> = Vec::with_capacity(entry.all.len() + 1);
    let candidates = entry.all.iter().map(String::as_str).chain(entry.preferred.as_deref());
    for alias in candidates {
        if !alias.is_empty() && !aliases.contains(&alias) {
            aliases.push(alias);
        }
    }
    aliases
}
