//! Builds a `RelationshipGraph` from organization records.

use tracing::debug;

use super::relationship_graph::RelationshipGraph;
use super::types::RelationshipKind;
use crate::records::OrganizationRecord;

/// Counters from a graph build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphBuildStats {
    pub records_seen: usize,
    /// Records without an id. Skipped entirely, not an error.
    pub records_skipped: usize,
    pub relationships_added: usize,
    /// Entries whose type is neither parent nor child, or whose target is empty.
    pub relationships_ignored: usize,
}

/// Incremental builder fed one record at a time.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: RelationshipGraph,
    stats: GraphBuildStats,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a full record sequence.
    pub fn from_records(records: &[OrganizationRecord]) -> (RelationshipGraph, GraphBuildStats) {
        let mut builder = Self::new();
        for record in records {
            builder.ingest(record);
        }
        builder.finish()
    }

    /// Add one record's parent/child entries.
    pub fn ingest(&mut self, record: &OrganizationRecord) {
        self.stats.records_seen += 1;

        let Some(source) = record.canonical_id() else {
            self.stats.records_skipped += 1;
            debug!("skipping record without id");
            return;
        };

        for rel in &record.relationships {
            let Some(kind) = RelationshipKind::parse(&rel.kind) else {
                self.stats.relationships_ignored += 1;
                debug!(org = source, kind = %rel.kind, "ignoring relationship type");
                continue;
            };
            if rel.id.is_empty() {
                self.stats.relationships_ignored += 1;
                debug!(org = source, %kind, "ignoring relationship without target");
                continue;
            }
            self.graph.add_edge(source, kind, &rel.id);
            self.stats.relationships_added += 1;
        }
    }

    pub fn finish(self) -> (RelationshipGraph, GraphBuildStats) {
        (self.graph, self.stats)
    }
}
