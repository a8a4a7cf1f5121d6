//! Data structures and string interning for orgtree.
//! FxHashMap, SmallVec, lasso-based interning, Spur-based organization keys.

pub mod collections;
pub mod identifiers;
pub mod interning;

pub use collections::{FxHashMap, FxHashSet};
pub use identifiers::OrgKey;
pub use interning::OrgInterner;
