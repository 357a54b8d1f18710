use crate::account::Account;
use crate::survey::{SurveyEvent, SurveyState};

/// How long an account must exist before the survey may prompt: 3 days.
pub const MIN_ACCOUNT_AGE_MS: i64 = 3 * 24 * 60 * 60 * 1000;

/// Decision the state machine hands back to the application layer.
///
/// No IO, no async, no time; the orchestrator executes the side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurveyDecision {
    /// Nothing to do (illegal or redundant transition)
    Ignore,

    /// Arm the fixed prompt delay
    SchedulePrompt,

    /// Present the prompt to the user
    PresentPrompt,

    /// Submission accepted; close the prompt and thank the user
    CloseWithThanks,

    /// Submission failed; keep the prompt open for retry
    KeepOpen,

    /// User dismissed; close the prompt for this session
    ClosePrompt,
}

/// Eligibility test, re-run whenever account data changes.
///
/// All of: monetization flag on, account loaded (the caller holds one),
/// `referred_by` still unset, and the account older than the minimum age.
pub fn is_eligible(account: &Account, monetization_enabled: bool, now_ms: i64) -> bool {
    monetization_enabled && account.referred_by.is_none() && account.age_ms(now_ms) > MIN_ACCOUNT_AGE_MS
}

pub struct SurveyDomain {
    state: SurveyState,
}

impl SurveyDomain {
    pub fn new() -> Self {
        Self {
            state: SurveyState::Hidden,
        }
    }

    pub fn state(&self) -> SurveyState {
        self.state
    }

    pub fn apply(&mut self, event: SurveyEvent) -> SurveyDecision {
        let decision = self.transition(event);
        #[cfg(feature = "tracing")]
        tracing::debug!(state = ?self.state, ?decision, "survey event applied");
        decision
    }

    fn transition(&mut self, event: SurveyEvent) -> SurveyDecision {
        use SurveyEvent::*;
        use SurveyState::*;

        match (&self.state, event) {
            // Eligibility fires once per session; anything past Hidden
            // ignores re-evaluation, so the prompt never shows twice.
            (Hidden, AccountEvaluated { eligible: true }) => {
                self.state = Eligible;
                SurveyDecision::SchedulePrompt
            }

            (Eligible, PromptDelayElapsed) => {
                self.state = Shown;
                SurveyDecision::PresentPrompt
            }

            (Shown, SubmissionSettled { success: true }) => {
                self.state = Answered;
                SurveyDecision::CloseWithThanks
            }

            // Failed submission leaves the prompt open for retry.
            (Shown, SubmissionSettled { success: false }) => SurveyDecision::KeepOpen,

            // Dismissal is terminal for the session but not persisted.
            (Shown, DismissRequested) => {
                self.state = Dismissed;
                SurveyDecision::ClosePrompt
            }

            // A dismissal racing the prompt delay wins; the delayed
            // PromptDelayElapsed then lands here and is ignored.
            (Eligible, DismissRequested) => {
                self.state = Dismissed;
                SurveyDecision::ClosePrompt
            }

            // Everything else: repeated events, out-of-order events,
            // evaluation against a terminal state.
            _ => SurveyDecision::Ignore,
        }
    }
}

impl Default for SurveyDomain {
    fn default() -> Self {
        Self::new()
    }
}
