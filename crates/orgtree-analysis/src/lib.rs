//! orgtree-analysis: the closure-computation engine.
//!
//! - Records: tolerant schema for raw organization records
//! - Graph: parent/child adjacency built from records
//! - Funders: funder alias → canonical id map and identifier resolution
//! - Closure: BFS ancestor/descendant traversal
//! - Index: sparse id → closure index
//! - Lookup: point queries against the index
//! - Pipeline: one pass over records feeding all of the above

pub mod closure;
pub mod funders;
pub mod graph;
pub mod index;
pub mod lookup;
pub mod pipeline;
pub mod records;

pub use closure::{ClosureComputer, Direction};
pub use funders::{FunderMap, FunderMapBuilder, FunderResolver};
pub use graph::{Adjacency, GraphBuilder, RelationshipGraph, RelationshipKind};
pub use index::{ClosureEntry, HierarchyIndex, IndexBuilder, KnownIds};
pub use lookup::{LookupService, LookupStatus, QueryResult};
pub use pipeline::{build, BuildOutput, BuildStats};
pub use records::{ExternalIdEntry, OrganizationRecord, RecordPage, RelationshipEntry};
