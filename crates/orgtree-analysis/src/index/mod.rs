//! Sparse hierarchy index: organization id → (ancestors, descendants).

pub mod builder;
pub mod types;

pub use builder::{IndexBuilder, IndexStats};
pub use types::{ClosureEntry, HierarchyIndex, KnownIds};
