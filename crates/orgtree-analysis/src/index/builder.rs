//! Builds the sparse `HierarchyIndex` from a `RelationshipGraph`.

use std::time::{Duration, Instant};

use orgtree_core::config::BuildConfig;
use orgtree_core::types::OrgKey;
use rayon::prelude::*;
use tracing::{info, warn};

use super::types::{ClosureEntry, HierarchyIndex};
use crate::closure::{ClosureComputer, Direction};
use crate::graph::RelationshipGraph;

/// Statistics from an index build.
#[derive(Debug, Clone, Default)]
pub struct IndexStats {
    /// Nodes enumerated (record ids with edges plus every referenced target).
    pub nodes: usize,
    /// Nodes stored in the index.
    pub indexed: usize,
    /// Nodes dropped because both closures were empty.
    pub omitted: usize,
    /// Whether closures were computed on the rayon pool.
    pub parallel: bool,
    pub duration: Duration,
}

/// Runs both closures for every node and keeps the non-empty ones.
///
/// Each node's traversal only reads the shared graph and writes its own
/// slot, so the parallel and sequential paths produce the same index.
#[derive(Debug, Clone, Default)]
pub struct IndexBuilder {
    config: BuildConfig,
}

impl IndexBuilder {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Builder that never touches the rayon pool.
    pub fn sequential() -> Self {
        Self::new(BuildConfig {
            parallel: Some(false),
            ..BuildConfig::default()
        })
    }

    pub fn build(&self, graph: &RelationshipGraph) -> (HierarchyIndex, IndexStats) {
        let start = Instant::now();
        let nodes = graph.node_keys();
        let computer = ClosureComputer::new(graph);
        let parallel = self.config.use_parallel_for(nodes.len());

        let entries: Vec<(String, ClosureEntry)> = if parallel {
            self.compute_parallel(&computer, &nodes)
        } else {
            nodes
                .iter()
                .filter_map(|&key| non_empty_entry(&computer, key))
                .collect()
        };

        let index: HierarchyIndex = entries.into_iter().collect();
        let stats = IndexStats {
            nodes: nodes.len(),
            indexed: index.len(),
            omitted: nodes.len() - index.len(),
            parallel,
            duration: start.elapsed(),
        };

        info!(
            nodes = stats.nodes,
            indexed = stats.indexed,
            omitted = stats.omitted,
            parallel = stats.parallel,
            elapsed_ms = stats.duration.as_millis() as u64,
            "hierarchy index built"
        );

        (index, stats)
    }

    fn compute_parallel(
        &self,
        computer: &ClosureComputer<'_>,
        nodes: &[OrgKey],
    ) -> Vec<(String, ClosureEntry)> {
        let run = || -> Vec<(String, ClosureEntry)> {
            nodes
                .par_iter()
                .filter_map(|&key| non_empty_entry(computer, key))
                .collect()
        };

        let threads = self.config.effective_threads();
        if threads == 0 {
            return run();
        }

        match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => pool.install(run),
            Err(e) => {
                warn!(threads, error = %e, "closure pool unavailable, using global pool");
                run()
            }
        }
    }
}

/// Both closures of `key`, or `None` when both are empty.
fn non_empty_entry(computer: &ClosureComputer<'_>, key: OrgKey) -> Option<(String, ClosureEntry)> {
    let ancestors = computer.closure(key, Direction::Ancestors);
    let descendants = computer.closure(key, Direction::Descendants);
    if ancestors.is_empty() && descendants.is_empty() {
        return None;
    }
    Some((
        computer.graph().resolve(key).to_string(),
        ClosureEntry::new(
            computer.resolve_all(&ancestors),
            computer.resolve_all(&descendants),
        ),
    ))
}
