use serde::{Deserialize, Serialize};

use crate::ids::CollectionId;

/// A collection of links, owned by the account.
///
/// `link_count` is the server-side aggregate of child links; this core only
/// reads it, it never recounts the links themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: CollectionId,
    pub name: String,
    pub link_count: u32,
}

impl Collection {
    pub fn new(id: impl Into<CollectionId>, name: impl Into<String>, link_count: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            link_count,
        }
    }
}
