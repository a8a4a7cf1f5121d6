//! Parent/child relationship graph built from organization records.

pub mod builder;
pub mod relationship_graph;
pub mod types;

pub use builder::{GraphBuildStats, GraphBuilder};
pub use relationship_graph::{Adjacency, RelationshipGraph};
pub use types::RelationshipKind;
