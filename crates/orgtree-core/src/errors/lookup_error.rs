//! Query-time negative results.

use super::error_code::{self, OrgtreeErrorCode};

/// The two ways a lookup can come back empty.
///
/// Both mean "no data". `NotIndexed` covers ids that never existed as
/// well as ids that exist but have no relationships; the sparse index
/// cannot tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Unknown identifier: {input}")]
    UnknownAlias { input: String },

    #[error("No hierarchy data for {org_id}")]
    NotIndexed { org_id: String },
}

impl LookupError {
    /// The canonical id the input resolved to, if resolution got that far.
    pub fn resolved_id(&self) -> Option<&str> {
        match self {
            Self::UnknownAlias { .. } => None,
            Self::NotIndexed { org_id } => Some(org_id),
        }
    }
}

impl OrgtreeErrorCode for LookupError {
    fn error_code(&self) -> &'static str {
        error_code::NOT_FOUND
    }
}
