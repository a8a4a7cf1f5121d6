//! Writing a build to disk and loading it back.

use orgtree_analysis::funders::FunderMap;
use orgtree_analysis::graph::{Adjacency, RelationshipGraph};
use orgtree_analysis::index::{HierarchyIndex, KnownIds};
use orgtree_analysis::lookup::LookupService;
use orgtree_analysis::pipeline::BuildOutput;
use orgtree_core::errors::StorageError;
use tracing::{debug, info};

use crate::json::{read_json, read_optional, stage};
use crate::layout::OutputLayout;

/// Persist every artifact of `output` under `layout`.
///
/// Every artifact is encoded to its temp file before any target is
/// replaced, so an encode or I/O failure leaves the previous snapshot
/// intact. Only a failing rename in the final step can leave a mix.
///
/// All maps serialize in key order and closure lists keep their BFS
/// order, so identical input yields byte-identical files.
pub fn write_snapshot(layout: &OutputLayout, output: &BuildOutput, pretty: bool) -> Result<(), StorageError> {
    let mut staged = vec![
        stage(&layout.funders(), &output.funders, pretty)?,
        stage(&layout.hierarchy(), &output.index, pretty)?,
        stage(&layout.relationships(), &output.graph.to_adjacency(), pretty)?,
    ];
    if let Some(ref known) = output.known {
        staged.push(stage(&layout.known_ids(), known, pretty)?);
    }

    for file in staged {
        file.commit()?;
    }
    if output.known.is_none() {
        remove_stale(layout)?;
    }

    info!(
        dir = %layout.dir().display(),
        funders = output.funders.len(),
        indexed = output.index.len(),
        known = output.known.as_ref().map(KnownIds::len),
        "snapshot written"
    );
    Ok(())
}

/// Load the funder map, the index, and the known-id set if one was written.
pub fn load_lookup(layout: &OutputLayout, canonical_prefix: &str) -> Result<LookupService, StorageError> {
    let funders: FunderMap = read_json(&layout.funders())?;
    let index: HierarchyIndex = read_json(&layout.hierarchy())?;
    let known: Option<KnownIds> = read_optional(&layout.known_ids())?;

    debug!(
        funders = funders.len(),
        indexed = index.len(),
        known = known.as_ref().map(KnownIds::len),
        "lookup artifacts loaded"
    );

    let service = LookupService::new(canonical_prefix, funders, index);
    Ok(match known {
        Some(known) => service.with_known_ids(known),
        None => service,
    })
}

/// Rebuild the relationship graph from its persisted adjacency.
pub fn load_graph(layout: &OutputLayout) -> Result<RelationshipGraph, StorageError> {
    let adjacency: Adjacency = read_json(&layout.relationships())?;
    Ok(RelationshipGraph::from_adjacency(&adjacency))
}

// A known-id file from an earlier build would otherwise be paired with
// an index it does not describe.
fn remove_stale(layout: &OutputLayout) -> Result<(), StorageError> {
    let path = layout.known_ids();
    match std::fs::remove_file(&path) {
        Ok(()) => {
            debug!(path = %path.display(), "removed stale known-id set");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(StorageError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        }),
    }
}
