//! Breadth-first closure traversal over a `RelationshipGraph`.

use std::collections::VecDeque;

use orgtree_core::types::collections::FxHashSet;
use orgtree_core::types::OrgKey;

use super::types::Direction;
use crate::graph::RelationshipGraph;

/// Computes transitive closures against a read-only graph.
///
/// Holds only a shared borrow, so one computer can serve many rayon
/// workers at once.
#[derive(Debug, Clone, Copy)]
pub struct ClosureComputer<'g> {
    graph: &'g RelationshipGraph,
}

impl<'g> ClosureComputer<'g> {
    pub fn new(graph: &'g RelationshipGraph) -> Self {
        Self { graph }
    }

    /// Every node reachable from `origin` in `direction`, in BFS
    /// discovery order (closer relationships first).
    ///
    /// Never contains `origin` and never contains duplicates, even when
    /// the graph has a cycle back through `origin`.
    pub fn closure(&self, origin: OrgKey, direction: Direction) -> Vec<OrgKey> {
        let kind = direction.edge_kind();
        let mut discovered: FxHashSet<OrgKey> = FxHashSet::default();
        let mut queue: VecDeque<OrgKey> = VecDeque::new();
        let mut out: Vec<OrgKey> = Vec::new();

        discovered.insert(origin);
        queue.push_back(origin);

        while let Some(current) = queue.pop_front() {
            for &neighbor in self.graph.neighbors(current, kind) {
                if discovered.insert(neighbor) {
                    out.push(neighbor);
                    queue.push_back(neighbor);
                }
            }
        }

        out
    }

    /// String-level closure. Unknown origins have an empty closure.
    pub fn closure_of(&self, origin: &str, direction: Direction) -> Vec<String> {
        match self.graph.key(origin) {
            Some(key) => self.resolve_all(&self.closure(key, direction)),
            None => Vec::new(),
        }
    }

    /// Resolve keys to owned ids, preserving order.
    pub fn resolve_all(&self, keys: &[OrgKey]) -> Vec<String> {
        keys.iter()
            .map(|k| self.graph.resolve(*k).to_string())
            .collect()
    }

    pub fn graph(&self) -> &'g RelationshipGraph {
        self.graph
    }
}
