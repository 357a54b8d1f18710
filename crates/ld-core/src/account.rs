use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::AccountId;

/// The viewing account, supplied by the external data layer.
///
/// `referred_by` starts `None` and is set at most once, by the survey
/// submission. The account update endpoint takes the whole object, so the
/// survey overlays the field on a copy instead of patching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub referred_by: Option<String>,
}

impl Account {
    /// Milliseconds elapsed since signup, as seen by the given clock reading.
    pub fn age_ms(&self, now_ms: i64) -> i64 {
        now_ms - self.created_at.timestamp_millis()
    }

    /// Copy of this account with `referred_by` overlaid.
    pub fn with_referred_by(&self, referred_by: impl Into<String>) -> Self {
        Self {
            referred_by: Some(referred_by.into()),
            ..self.clone()
        }
    }
}
