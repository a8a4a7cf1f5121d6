//! Index types.

use orgtree_core::types::collections::{BTreeMap, BTreeSet};
use serde::{Deserialize, Deserializer, Serialize};

/// Closures of one organization. Both lists are in BFS discovery order
/// and never contain the organization's own id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClosureEntry {
    pub ancestors: Vec<String>,
    pub descendants: Vec<String>,
}

impl ClosureEntry {
    pub fn new(ancestors: Vec<String>, descendants: Vec<String>) -> Self {
        Self {
            ancestors,
            descendants,
        }
    }

    /// True when the organization has neither ancestors nor descendants.
    pub fn is_empty(&self) -> bool {
        self.ancestors.is_empty() && self.descendants.is_empty()
    }
}

/// Sparse map from canonical id to its closures.
///
/// Organizations whose closures are both empty are never stored, so
/// absence means either "unknown id" or "known, no relationships".
/// Keys are ordered, which keeps serialized output stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HierarchyIndex {
    entries: BTreeMap<String, ClosureEntry>,
}

impl HierarchyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry. Empty entries are dropped; returns whether it was stored.
    pub fn insert(&mut self, id: impl Into<String>, entry: ClosureEntry) -> bool {
        if entry.is_empty() {
            return false;
        }
        self.entries.insert(id.into(), entry);
        true
    }

    pub fn get(&self, id: &str) -> Option<&ClosureEntry> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ClosureEntry)> {
        self.entries.iter().map(|(id, e)| (id.as_str(), e))
    }
}

impl FromIterator<(String, ClosureEntry)> for HierarchyIndex {
    fn from_iter<I: IntoIterator<Item = (String, ClosureEntry)>>(iter: I) -> Self {
        let mut index = Self::new();
        for (id, entry) in iter {
            index.insert(id, entry);
        }
        index
    }
}

// Loading re-applies the sparsity rule, so a hand-edited artifact
// cannot smuggle in empty entries.
impl<'de> Deserialize<'de> for HierarchyIndex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, ClosureEntry>::deserialize(deserializer)?;
        Ok(raw.into_iter().collect())
    }
}

/// Every canonical id seen during a build: record ids plus relationship
/// targets. Lets lookups tell "known, no relationships" from "unknown".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnownIds {
    ids: BTreeSet<String>,
}

impl KnownIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        self.ids.insert(id.into())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl FromIterator<String> for KnownIds {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
