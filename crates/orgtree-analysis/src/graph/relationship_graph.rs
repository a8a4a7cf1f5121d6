//! Sparse parent/child adjacency over interned organization keys.

use orgtree_core::types::collections::{BTreeMap, FxHashMap, FxHashSet, SmallVec4};
use orgtree_core::types::{OrgInterner, OrgKey};
use serde::{Deserialize, Serialize};

use super::types::RelationshipKind;

/// Two adjacency maps, `parents_of` and `children_of`.
///
/// Only nodes with at least one outgoing edge of a kind have an entry in
/// that kind's map; a missing key reads as an empty list. Edge order
/// follows input order and duplicate edges are kept.
///
/// Targets without a record of their own are still nodes.
#[derive(Debug, Default)]
pub struct RelationshipGraph {
    interner: OrgInterner,
    parents_of: FxHashMap<OrgKey, SmallVec4<OrgKey>>,
    children_of: FxHashMap<OrgKey, SmallVec4<OrgKey>>,
    edge_count: usize,
}

/// String-keyed, ordered view of the graph used for persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Adjacency {
    pub parents_of: BTreeMap<String, Vec<String>>,
    pub children_of: BTreeMap<String, Vec<String>>,
}

impl RelationshipGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `target` is a `kind` of `source`.
    pub fn add_edge(&mut self, source: &str, kind: RelationshipKind, target: &str) {
        let source = self.interner.intern(source);
        let target = self.interner.intern(target);
        self.map_mut(kind).entry(source).or_default().push(target);
        self.edge_count += 1;
    }

    /// Neighbors of `key` along `kind` edges, in insertion order.
    pub fn neighbors(&self, key: OrgKey, kind: RelationshipKind) -> &[OrgKey] {
        self.map(kind)
            .get(&key)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Direct parents of `id` (empty if unknown).
    pub fn parents_of(&self, id: &str) -> Vec<&str> {
        self.neighbor_ids(id, RelationshipKind::Parent)
    }

    /// Direct children of `id` (empty if unknown).
    pub fn children_of(&self, id: &str) -> Vec<&str> {
        self.neighbor_ids(id, RelationshipKind::Child)
    }

    /// Key for an id already present in the graph.
    pub fn key(&self, id: &str) -> Option<OrgKey> {
        self.interner.get(id)
    }

    /// Resolve a key back to its canonical id.
    pub fn resolve(&self, key: OrgKey) -> &str {
        self.interner.resolve(key)
    }

    /// Whether `id` appears anywhere in the graph, as a source or a target.
    pub fn contains(&self, id: &str) -> bool {
        self.key(id).is_some()
    }

    /// Every node in the graph: keys of both maps plus every referenced
    /// target, deduplicated and sorted by id so enumeration is stable.
    pub fn node_keys(&self) -> Vec<OrgKey> {
        let mut seen: FxHashSet<OrgKey> = FxHashSet::default();
        for map in [&self.parents_of, &self.children_of] {
            for (source, targets) in map {
                seen.insert(*source);
                seen.extend(targets.iter().copied());
            }
        }
        let mut keys: Vec<OrgKey> = seen.into_iter().collect();
        keys.sort_unstable_by(|a, b| self.resolve(*a).cmp(self.resolve(*b)));
        keys
    }

    /// Number of distinct nodes.
    pub fn node_count(&self) -> usize {
        // Ids are only interned through add_edge, so the interner holds exactly the nodes.
        self.interner.len()
    }

    /// Number of edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.edge_count == 0
    }

    /// Ordered, string-keyed copy of both maps.
    pub fn to_adjacency(&self) -> Adjacency {
        Adjacency {
            parents_of: self.export(RelationshipKind::Parent),
            children_of: self.export(RelationshipKind::Child),
        }
    }

    /// Rebuild a graph from a persisted adjacency.
    pub fn from_adjacency(adjacency: &Adjacency) -> Self {
        let mut graph = Self::new();
        for (source, targets) in &adjacency.parents_of {
            for target in targets {
                graph.add_edge(source, RelationshipKind::Parent, target);
            }
        }
        for (source, targets) in &adjacency.children_of {
            for target in targets {
                graph.add_edge(source, RelationshipKind::Child, target);
            }
        }
        graph
    }

    fn neighbor_ids(&self, id: &str, kind: RelationshipKind) -> Vec<&str> {
        match self.key(id) {
            Some(key) => self
                .neighbors(key, kind)
                .iter()
                .map(|k| self.resolve(*k))
                .collect(),
            None => Vec::new(),
        }
    }

    fn export(&self, kind: RelationshipKind) -> BTreeMap<String, Vec<String>> {
        self.map(kind)
            .iter()
            .map(|(source, targets)| {
                (
                    self.resolve(*source).to_string(),
                    targets.iter().map(|t| self.resolve(*t).to_string()).collect(),
                )
            })
            .collect()
    }

    fn map(&self, kind: RelationshipKind) -> &FxHashMap<OrgKey, SmallVec4<OrgKey>> {
        match kind {
            RelationshipKind::Parent => &self.parents_of,
            RelationshipKind::Child => &self.children_of,
        }
    }

    fn map_mut(&mut self, kind: RelationshipKind) -> &mut FxHashMap<OrgKey, SmallVec4<OrgKey>> {
        match kind {
            RelationshipKind::Parent => &mut self.parents_of,
            RelationshipKind::Child => &mut self.children_of,
        }
    }
}
