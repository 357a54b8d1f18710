use serde::{Deserialize, Serialize};

/// Result of one import submission, as shown to the user.
///
/// Transitions only run forward: `Pending` settles into `Succeeded` or
/// `Failed` exactly once and a settled outcome never changes again. Not
/// persisted anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportOutcome {
    Pending,
    Succeeded,
    Failed(String),
}

impl ImportOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ImportOutcome::Pending)
    }

    /// Advance towards `next`, keeping the current value when the transition
    /// would run backward.
    pub fn settle(self, next: ImportOutcome) -> ImportOutcome {
        match (&self, &next) {
            (ImportOutcome::Pending, _) if next.is_terminal() => next,
            _ => self,
        }
    }
}
