//! Ancestor/descendant closure computation.
//!
//! One BFS per origin and direction. Nodes are marked when first
//! discovered, so each is expanded at most once and cycles terminate.

pub mod bfs;
pub mod types;

pub use bfs::ClosureComputer;
pub use types::Direction;
