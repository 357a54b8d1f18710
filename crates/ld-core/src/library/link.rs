use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{AccountId, LinkId};

/// A saved link.
///
/// Supplied already sorted most-recent-first by the upstream data source.
/// A link is pinned for the viewing account when `pinned_by` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: LinkId,
    pub name: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub pinned_by: Vec<AccountId>,
}

impl Link {
    pub fn is_pinned(&self) -> bool {
        !self.pinned_by.is_empty()
    }
}
