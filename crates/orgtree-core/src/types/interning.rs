//! String interning for organization identifiers.
//!
//! Uses `lasso::ThreadedRodeo` so the interner can be shared read-only
//! across rayon workers while closures are computed.

use lasso::ThreadedRodeo;

use super::identifiers::OrgKey;

/// Interner mapping canonical organization ids to `OrgKey`s.
///
/// Ids are opaque: no normalization is applied before interning.
pub struct OrgInterner {
    inner: ThreadedRodeo,
}

impl OrgInterner {
    /// Create a new, empty interner.
    pub fn new() -> Self {
        Self {
            inner: ThreadedRodeo::default(),
        }
    }

    /// Intern an id, returning its key.
    pub fn intern(&self, id: &str) -> OrgKey {
        OrgKey(self.inner.get_or_intern(id))
    }

    /// Look up a previously interned id without inserting.
    pub fn get(&self, id: &str) -> Option<OrgKey> {
        self.inner.get(id).map(OrgKey)
    }

    /// Resolve a key back to its id.
    pub fn resolve(&self, key: OrgKey) -> &str {
        self.inner.resolve(&key.0)
    }

    /// Number of distinct ids interned so far.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Default for OrgInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for OrgInterner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrgInterner")
            .field("len", &self.inner.len())
            .finish()
    }
}
