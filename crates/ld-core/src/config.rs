//! Application configuration domain model

use serde::{Deserialize, Serialize};

/// Application configuration
///
/// Only the configuration the orchestration layer needs; everything else
/// belongs to the embedding application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the bookmark manager API this client talks to
    pub api_base_url: String,

    /// Whether the monetization feature set is enabled for this deployment.
    /// Gates the feedback survey prompt.
    pub monetization_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:3000".to_string(),
            monetization_enabled: false,
        }
    }
}
