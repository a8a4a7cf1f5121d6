//! Lookup configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CANONICAL_PREFIX;

/// Configuration for identifier resolution at query time.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct LookupConfig {
    /// Inputs starting with this prefix are treated as canonical ids.
    /// Default: `https://ror.org/`.
    pub canonical_prefix: Option<String>,
}

impl LookupConfig {
    pub fn effective_canonical_prefix(&self) -> &str {
        self.canonical_prefix
            .as_deref()
            .unwrap_or(DEFAULT_CANONICAL_PREFIX)
    }
}
