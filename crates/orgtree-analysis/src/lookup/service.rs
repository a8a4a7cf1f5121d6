//! Read-only lookup service.

use orgtree_core::errors::LookupError;

use super::types::{LookupStatus, QueryResult};
use crate::funders::{FunderMap, FunderResolver};
use crate::index::{ClosureEntry, HierarchyIndex, KnownIds};

/// Answers ancestor/descendant/existence queries.
///
/// Owns immutable snapshots of the index, funder map and (optionally)
/// the known-id set. Nothing mutates after construction, so a service
/// can be shared across threads behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct LookupService {
    resolver: FunderResolver,
    index: HierarchyIndex,
    known: Option<KnownIds>,
}

impl LookupService {
    pub fn new(canonical_prefix: impl Into<String>, funders: FunderMap, index: HierarchyIndex) -> Self {
        Self {
            resolver: FunderResolver::new(canonical_prefix, funders),
            index,
            known: None,
        }
    }

    /// Attach the auxiliary existence set used by [`LookupService::status`].
    pub fn with_known_ids(mut self, known: KnownIds) -> Self {
        self.known = Some(known);
        self
    }

    /// Resolve `input_id` and return its closures.
    pub fn query(&self, input_id: &str) -> Result<QueryResult, LookupError> {
        let org_id = self.resolver.resolve(input_id)?;
        let entry = self.indexed(org_id)?;
        Ok(QueryResult {
            org_id: org_id.to_string(),
            input_id: input_id.to_string(),
            ancestors: entry.ancestors.clone(),
            descendants: entry.descendants.clone(),
        })
    }

    pub fn ancestors_of(&self, input_id: &str) -> Result<&[String], LookupError> {
        self.lookup_entry(input_id)
            .map(|entry| entry.ancestors.as_slice())
    }

    pub fn descendants_of(&self, input_id: &str) -> Result<&[String], LookupError> {
        self.lookup_entry(input_id)
            .map(|entry| entry.descendants.as_slice())
    }

    /// Not-found counts as `false`.
    pub fn has_ancestors(&self, input_id: &str) -> bool {
        self.ancestors_of(input_id)
            .map(|a| !a.is_empty())
            .unwrap_or(false)
    }

    /// Not-found counts as `false`.
    pub fn has_descendants(&self, input_id: &str) -> bool {
        self.descendants_of(input_id)
            .map(|d| !d.is_empty())
            .unwrap_or(false)
    }

    /// Whether the input is indexed, known without relationships, or not found.
    pub fn status(&self, input_id: &str) -> LookupStatus {
        let org_id = match self.resolver.resolve(input_id) {
            Ok(id) => id,
            Err(_) => return LookupStatus::NotFound,
        };
        if self.index.contains(org_id) {
            return LookupStatus::Indexed;
        }
        match self.known {
            Some(ref known) if known.contains(org_id) => LookupStatus::KnownWithoutRelationships,
            _ => LookupStatus::NotFound,
        }
    }

    /// Resolve an input to its canonical id without touching the index.
    pub fn resolve<'a>(&'a self, input_id: &'a str) -> Result<&'a str, LookupError> {
        self.resolver.resolve(input_id)
    }

    pub fn index(&self) -> &HierarchyIndex {
        &self.index
    }

    pub fn funders(&self) -> &FunderMap {
        self.resolver.funders()
    }

    pub fn known_ids(&self) -> Option<&KnownIds> {
        self.known.as_ref()
    }

    fn lookup_entry(&self, input_id: &str) -> Result<&ClosureEntry, LookupError> {
        let org_id = self.resolver.resolve(input_id)?;
        self.indexed(org_id)
    }

    fn indexed(&self, org_id: &str) -> Result<&ClosureEntry, LookupError> {
        self.index.get(org_id).ok_or_else(|| LookupError::NotIndexed {
            org_id: org_id.to_string(),
        })
    }
}
