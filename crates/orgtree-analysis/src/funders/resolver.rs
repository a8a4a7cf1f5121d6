//! Input identifier → canonical id resolution.

use orgtree_core::errors::LookupError;

use super::map::FunderMap;

/// Resolves arbitrary inputs to canonical ids.
///
/// Inputs starting with the canonical prefix pass through unchanged;
/// anything else is looked up as a funder alias.
#[derive(Debug, Clone)]
pub struct FunderResolver {
    canonical_prefix: String,
    funders: FunderMap,
}

impl FunderResolver {
    pub fn new(canonical_prefix: impl Into<String>, funders: FunderMap) -> Self {
        Self {
            canonical_prefix: canonical_prefix.into(),
            funders,
        }
    }

    /// Whether `input` already has the canonical id shape.
    pub fn is_canonical(&self, input: &str) -> bool {
        input.starts_with(&self.canonical_prefix)
    }

    /// Resolve `input` to a canonical id.
    pub fn resolve<'a>(&'a self, input: &'a str) -> Result<&'a str, LookupError> {
        if self.is_canonical(input) {
            return Ok(input);
        }
        self.funders
            .get(input)
            .ok_or_else(|| LookupError::UnknownAlias {
                input: input.to_string(),
            })
    }

    pub fn canonical_prefix(&self) -> &str {
        &self.canonical_prefix
    }

    pub fn funders(&self) -> &FunderMap {
        &self.funders
    }
}
