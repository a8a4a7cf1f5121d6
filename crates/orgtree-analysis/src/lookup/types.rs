//! Lookup result types.

use serde::{Deserialize, Serialize};

/// A successful lookup. `input_id` echoes what the caller asked for,
/// which may be a funder alias rather than the canonical id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    pub org_id: String,
    pub input_id: String,
    pub ancestors: Vec<String>,
    pub descendants: Vec<String>,
}

/// Existence answer for an input identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LookupStatus {
    /// Present in the hierarchy index.
    Indexed,
    /// Resolves to a known organization that has no relationships.
    /// Only reported when the known-id set is loaded.
    KnownWithoutRelationships,
    /// Unknown alias, unknown id, or (without a known-id set) an
    /// organization with no relationships.
    NotFound,
}

impl LookupStatus {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Indexed => "indexed",
            Self::KnownWithoutRelationships => "known-without-relationships",
            Self::NotFound => "not-found",
        }
    }
}

impl std::fmt::Display for LookupStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
