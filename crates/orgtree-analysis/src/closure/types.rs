//! Closure traversal direction.

use serde::{Deserialize, Serialize};

use crate::graph::RelationshipKind;

/// Which closure to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Walk `parents_of`.
    Ancestors,
    /// Walk `children_of`.
    Descendants,
}

impl Direction {
    /// The adjacency walked for this direction.
    pub fn edge_kind(&self) -> RelationshipKind {
        match self {
            Self::Ancestors => RelationshipKind::Parent,
            Self::Descendants => RelationshipKind::Child,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Ancestors => "ancestors",
            Self::Descendants => "descendants",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
