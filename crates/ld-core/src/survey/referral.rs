use serde::{Deserialize, Serialize};

/// Prefix applied to free-text answers from the "other" choice.
pub const OTHER_PREFIX: &str = "Other: ";

/// The user's answer to the feedback prompt.
///
/// Either one of the canonical referral source strings offered by the
/// prompt, or the sentinel "other" choice carrying free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferralSource {
    Canonical(String),
    Other(String),
}

impl ReferralSource {
    /// The `referred_by` value this answer maps to.
    pub fn as_referred_by(&self) -> String {
        match self {
            ReferralSource::Canonical(source) => source.clone(),
            ReferralSource::Other(text) => format!("{OTHER_PREFIX}{text}"),
        }
    }
}
