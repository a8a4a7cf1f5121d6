//! Spur-based key type for interned organization identifiers.
//!
//! Canonical ids are long URL-shaped strings. The traversal works on
//! `OrgKey`s and only resolves back to strings when closures are emitted.

use lasso::Spur;
use serde::{Deserialize, Serialize};

/// Interned canonical organization identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrgKey(pub Spur);

impl OrgKey {
    /// Create a new key from a `Spur`.
    pub fn new(spur: Spur) -> Self {
        Self(spur)
    }

    /// Get the inner `Spur`.
    pub fn inner(self) -> Spur {
        self.0
    }
}

impl From<Spur> for OrgKey {
    fn from(spur: Spur) -> Self {
        Self(spur)
    }
}

impl From<OrgKey> for Spur {
    fn from(key: OrgKey) -> Self {
        key.0
    }
}
