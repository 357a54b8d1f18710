//! Feedback survey orchestrator
//!
//! Converts account data changes, the prompt delay, and user input into
//! state machine events, and executes the decisions the state machine hands
//! back. The state machine itself (ld-core `survey`) stays pure.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use tracing::{info, info_span, warn, Instrument};

use ld_core::account::Account;
use ld_core::config::AppConfig;
use ld_core::ports::{
    AccountGatewayPort, AccountUpdateError, ClockPort, DelayPort, NotifierPort,
};
use ld_core::survey::{
    is_eligible, ReferralSource, SurveyDecision, SurveyDomain, SurveyEvent, SurveyState,
};

/// Debounce between becoming eligible and presenting the prompt.
pub const PROMPT_DELAY_MS: u64 = 1_000;

const APPLYING_MESSAGE: &str = "Applying...";
const THANKS_MESSAGE: &str = "Thanks for the feedback!";
const SUBMIT_ERROR_MESSAGE: &str = "Failed to apply your answer. Please try again.";

/// How one submission attempt settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurveySubmission {
    /// Answer accepted; the prompt closed.
    Applied,
    /// Server rejected the update; the prompt stays open for retry.
    Rejected(String),
    /// A prior submission is still in flight; this call was dropped.
    AlreadyInFlight,
}

pub struct SurveyOrchestrator {
    domain: Mutex<SurveyDomain>,
    clock: Arc<dyn ClockPort>,
    delay: Arc<dyn DelayPort>,
    accounts: Arc<dyn AccountGatewayPort>,
    notifier: Arc<dyn NotifierPort>,
    monetization_enabled: bool,
    /// Submission guard; set before awaiting the network call and cleared
    /// unconditionally when it settles.
    submit_loader: AtomicBool,
}

impl SurveyOrchestrator {
    pub fn new(
        clock: Arc<dyn ClockPort>,
        delay: Arc<dyn DelayPort>,
        accounts: Arc<dyn AccountGatewayPort>,
        notifier: Arc<dyn NotifierPort>,
        config: &AppConfig,
    ) -> Self {
        Self {
            domain: Mutex::new(SurveyDomain::new()),
            clock,
            delay,
            accounts,
            notifier,
            monetization_enabled: config.monetization_enabled,
            submit_loader: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> SurveyState {
        self.domain.lock().unwrap().state()
    }

    /// Re-evaluate eligibility after an account data change.
    ///
    /// The first eligible evaluation arms the prompt delay; once it runs
    /// out the prompt is presented. Later evaluations are absorbed by the
    /// state machine, so the prompt shows at most once per session.
    pub async fn on_account_loaded(&self, account: &Account) -> SurveyState {
        let span = info_span!("usecase.survey.on_account_loaded");

        async {
            let eligible = is_eligible(account, self.monetization_enabled, self.clock.now_ms());
            let decision = self
                .domain
                .lock()
                .unwrap()
                .apply(SurveyEvent::AccountEvaluated { eligible });

            if decision == SurveyDecision::SchedulePrompt {
                info!("account became survey-eligible, arming prompt delay");
                self.delay.delay_ms(PROMPT_DELAY_MS).await;

                let decision = self
                    .domain
                    .lock()
                    .unwrap()
                    .apply(SurveyEvent::PromptDelayElapsed);
                if decision == SurveyDecision::PresentPrompt {
                    info!("survey prompt presented");
                }
            }

            self.state()
        }
        .instrument(span)
        .await
    }

    /// Submit the user's answer.
    ///
    /// Re-entrant calls while a prior submission is in flight are dropped
    /// silently. Success closes the prompt with a thank-you notice; failure
    /// surfaces the server message and leaves the prompt open for retry.
    pub async fn submit(
        &self,
        account: &Account,
        source: ReferralSource,
    ) -> Result<SurveySubmission> {
        let span = info_span!("usecase.survey.submit");

        async {
            if self.submit_loader.swap(true, Ordering::SeqCst) {
                return Ok(SurveySubmission::AlreadyInFlight);
            }

            let key = self.notifier.pending(APPLYING_MESSAGE);
            let updated = account.with_referred_by(source.as_referred_by());

            let result = self.accounts.update(&updated).await;

            // Both settlement paths clear the guard, so a failed attempt
            // never locks the prompt.
            self.submit_loader.store(false, Ordering::SeqCst);
            self.notifier.dismiss(&key);

            match result {
                Ok(()) => {
                    self.domain
                        .lock()
                        .unwrap()
                        .apply(SurveyEvent::SubmissionSettled { success: true });
                    info!("survey answer applied");
                    self.notifier.success(THANKS_MESSAGE);
                    Ok(SurveySubmission::Applied)
                }
                Err(error) => {
                    self.domain
                        .lock()
                        .unwrap()
                        .apply(SurveyEvent::SubmissionSettled { success: false });
                    let message = match &error {
                        AccountUpdateError::Rejected { message } => message.clone(),
                        AccountUpdateError::Transport(_) => SUBMIT_ERROR_MESSAGE.to_string(),
                    };
                    warn!(%error, "survey submission failed");
                    self.notifier.error(&message);
                    Ok(SurveySubmission::Rejected(message))
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Close the prompt without answering; terminal for this session.
    pub fn dismiss(&self) -> SurveyState {
        let mut domain = self.domain.lock().unwrap();
        if domain.apply(SurveyEvent::DismissRequested) == SurveyDecision::ClosePrompt {
            info!("survey prompt dismissed");
        }
        domain.state()
    }
}
