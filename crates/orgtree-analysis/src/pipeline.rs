//! Batch build: records → graph + funder map → hierarchy index.

use std::time::{Duration, Instant};

use orgtree_core::config::BuildConfig;
use tracing::info;

use crate::funders::{FunderMap, FunderMapBuilder};
use crate::graph::{GraphBuilder, RelationshipGraph};
use crate::index::{HierarchyIndex, IndexBuilder, KnownIds};
use crate::lookup::LookupService;
use crate::records::OrganizationRecord;

/// Everything a build produces.
#[derive(Debug)]
pub struct BuildOutput {
    pub graph: RelationshipGraph,
    pub funders: FunderMap,
    pub index: HierarchyIndex,
    /// Present when `build.track_known_ids` is on.
    pub known: Option<KnownIds>,
    pub stats: BuildStats,
}

impl BuildOutput {
    /// Serve queries straight from a fresh build.
    pub fn into_lookup(self, canonical_prefix: impl Into<String>) -> LookupService {
        let service = LookupService::new(canonical_prefix, self.funders, self.index);
        match self.known {
            Some(known) => service.with_known_ids(known),
            None => service,
        }
    }
}

/// Statistics from a full build.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    pub records_seen: usize,
    pub records_skipped: usize,
    pub relationships_ignored: usize,
    pub nodes: usize,
    pub edges: usize,
    pub aliases: usize,
    pub alias_collisions: usize,
    pub indexed: usize,
    pub omitted: usize,
    pub parallel: bool,
    pub duration: Duration,
}

/// Run the full build over an immutable record snapshot.
///
/// Records are visited once, in order; the graph builder and the funder
/// builder each see every record. Funder alias collisions resolve to the
/// later record.
pub fn build(records: &[OrganizationRecord], config: &BuildConfig) -> BuildOutput {
    let start = Instant::now();
    let track_known = config.effective_track_known_ids();

    let mut graph_builder = GraphBuilder::new();
    let mut funder_builder = FunderMapBuilder::new();
    let mut known = KnownIds::new();

    for record in records {
        graph_builder.ingest(record);
        funder_builder.ingest(record);
        if track_known {
            if let Some(id) = record.canonical_id() {
                known.insert(id);
            }
        }
    }

    let (graph, graph_stats) = graph_builder.finish();
    let (funders, funder_stats) = funder_builder.finish();

    let known = track_known.then(|| {
        for key in graph.node_keys() {
            known.insert(graph.resolve(key));
        }
        known
    });

    let (index, index_stats) = IndexBuilder::new(config.clone()).build(&graph);

    let stats = BuildStats {
        records_seen: graph_stats.records_seen,
        records_skipped: graph_stats.records_skipped,
        relationships_ignored: graph_stats.relationships_ignored,
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        aliases: funders.len(),
        alias_collisions: funder_stats.collisions,
        indexed: index_stats.indexed,
        omitted: index_stats.omitted,
        parallel: index_stats.parallel,
        duration: start.elapsed(),
    };

    info!(
        records = stats.records_seen,
        skipped = stats.records_skipped,
        ignored_relationships = stats.relationships_ignored,
        nodes = stats.nodes,
        edges = stats.edges,
        aliases = stats.aliases,
        alias_collisions = stats.alias_collisions,
        indexed = stats.indexed,
        omitted = stats.omitted,
        elapsed_ms = stats.duration.as_millis() as u64,
        "build complete"
    );

    BuildOutput {
        graph,
        funders,
        index,
        known,
        stats,
    }
}
