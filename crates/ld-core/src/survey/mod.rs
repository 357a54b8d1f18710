//! One-time feedback survey: eligibility, prompt lifecycle, answer payload.

pub mod domain;
pub mod event;
pub mod referral;
pub mod state;

pub use domain::{is_eligible, SurveyDecision, SurveyDomain, MIN_ACCOUNT_AGE_MS};
pub use event::SurveyEvent;
pub use referral::{ReferralSource, OTHER_PREFIX};
pub use state::SurveyState;
