//! Asset domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A piece of medical equipment that can be linked to a bed assignment.
///
/// Only `id` and `name` are interpreted. Any other upstream fields are kept in
/// `attributes` and serialized back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: Uuid,
    pub name: String,
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

impl Asset {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            attributes: serde_json::Map::new(),
        }
    }
}

/// Classification of assets relative to the previous bed assignment.
///
/// The three lists are disjoint. `existing` and `unlinked` follow the order of
/// the previous assignment's assets, `newly_linked` the order of the current one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetDiff {
    pub newly_linked: Vec<Asset>,
    pub existing: Vec<Asset>,
    pub unlinked: Vec<Asset>,
}

impl AssetDiff {
    /// True when no asset falls into any of the three lists.
    pub fn is_empty(&self) -> bool {
        self.newly_linked.is_empty() && self.existing.is_empty() && self.unlinked.is_empty()
    }
}
