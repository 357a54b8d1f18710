pub mod orchestrator;

pub use orchestrator::{SurveyOrchestrator, SurveySubmission, PROMPT_DELAY_MS};
