//! Relationship kinds the graph understands.

use orgtree_core::constants::{RELATIONSHIP_CHILD, RELATIONSHIP_PARENT};
use serde::{Deserialize, Serialize};

/// Kind of a directed relationship edge, seen from the record that declares it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationshipKind {
    /// The target is a parent of the source.
    Parent,
    /// The target is a child of the source.
    Child,
}

impl RelationshipKind {
    /// Parse a raw relationship type, case-insensitively.
    /// Anything other than `parent` / `child` (e.g. `related`, `successor`) is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case(RELATIONSHIP_PARENT) {
            Some(Self::Parent)
        } else if raw.eq_ignore_ascii_case(RELATIONSHIP_CHILD) {
            Some(Self::Child)
        } else {
            None
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Parent => RELATIONSHIP_PARENT,
            Self::Child => RELATIONSHIP_CHILD,
        }
    }
}

impl std::fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
