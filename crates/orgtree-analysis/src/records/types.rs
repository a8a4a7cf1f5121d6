//! Record schema. Strict shape, tolerant of gaps: missing or `null`
//! collections become empty, unknown fields are ignored.

use serde::{Deserialize, Deserializer, Serialize};

/// One organization as it appears in a registry dump.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationRecord {
    pub id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub relationships: Vec<RelationshipEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub external_ids: Vec<ExternalIdEntry>,
}

impl OrganizationRecord {
    /// The record's canonical id, treating an empty string as absent.
    pub fn canonical_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

/// A typed link from the record's organization to another one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationshipEntry {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
}

/// An external identifier block (`fundref`, `grid`, `isni`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalIdEntry {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "one_or_many")]
    pub all: Vec<String>,
    pub preferred: Option<String>,
}

/// Registry API page shape: the records wrapped in an `items` array.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RecordPage {
    pub items: Vec<OrganizationRecord>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Older dumps store a lone alias as a bare string instead of a list.
/// `null` entries inside the list are dropped.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<Option<String>>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(s)) => vec![s],
        Some(OneOrMany::Many(v)) => v.into_iter().flatten().collect(),
    })
}
