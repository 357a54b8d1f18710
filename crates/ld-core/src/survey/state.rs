use serde::{Deserialize, Serialize};

/// Feedback survey state machine
///
/// Design principle: this is a pure type state machine with only state
/// definitions and classification logic. Runtime behaviors like the prompt
/// delay and the submission network call are handled by the application
/// layer (ld-app).
///
/// State transitions:
/// ```text
///   Hidden
///    │ AccountEvaluated{eligible=true}
///    ▼
///   Eligible
///    │ PromptDelayElapsed
///    ▼
///   Shown
///    ├── SubmissionSettled{success=true}  ─► Answered
///    ├── SubmissionSettled{success=false} ─► Shown (prompt stays open)
///    └── DismissRequested ────────────────► Dismissed
/// ```
///
/// `Answered` and `Dismissed` are terminal for the session. Neither is
/// persisted; a dismissed prompt may reappear on reload unless the account's
/// `referred_by` became non-null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurveyState {
    /// Preconditions not met, or not evaluated yet
    Hidden,

    /// All preconditions met, prompt delay running
    Eligible,

    /// Prompt presented, waiting for the user
    Shown,

    /// User submitted a referral source
    Answered,

    /// User closed the prompt without answering
    Dismissed,
}

impl SurveyState {
    /// Check if this is a terminal state (no more transitions possible)
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Answered | Self::Dismissed)
    }

    /// Check if the prompt is currently visible to the user
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Shown)
    }

    /// Check if eligibility evaluation may still promote this state
    pub fn can_become_eligible(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl Default for SurveyState {
    fn default() -> Self {
        Self::Hidden
    }
}
