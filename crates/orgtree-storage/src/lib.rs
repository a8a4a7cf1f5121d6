//! orgtree-storage: JSON persistence for build inputs and artifacts.
//!
//! - Records: buffered decode of a registry dump
//! - Layout: artifact file names under the output directory
//! - Json: atomic writes, typed reads
//! - Snapshot: write a build, load it back for lookups

pub mod json;
pub mod layout;
pub mod records;
pub mod snapshot;

pub use layout::OutputLayout;
pub use records::load_records;
pub use snapshot::{load_graph, load_lookup, write_snapshot};
