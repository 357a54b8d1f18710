/// Inputs to the survey state machine.
///
/// Produced by the application layer from account data changes, the prompt
/// delay, submission settlement, and user dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurveyEvent {
    /// Account data changed and eligibility was re-evaluated.
    AccountEvaluated { eligible: bool },

    /// The fixed prompt delay ran out.
    PromptDelayElapsed,

    /// The submission network call settled.
    SubmissionSettled { success: bool },

    /// The user closed the prompt without answering.
    DismissRequested,
}
