//! Use case for loading the client-local dashboard settings.

use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use ld_core::ports::SettingsPort;
use ld_core::settings::DashboardSettings;

/// Loads the dashboard settings, read once at initialization.
///
/// Any failure degrades to defaults; a broken settings file must never keep
/// the dashboard from rendering.
pub struct LoadDashboardSettings {
    settings: Arc<dyn SettingsPort>,
}

impl LoadDashboardSettings {
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    pub async fn execute(&self) -> DashboardSettings {
        let span = info_span!("usecase.load_dashboard_settings.execute");

        async {
            match self.settings.load().await {
                Ok(settings) => {
                    info!(layout = ?settings.layout, columns = ?settings.columns, "settings loaded");
                    settings
                }
                Err(error) => {
                    warn!(%error, "settings load failed, falling back to defaults");
                    DashboardSettings::default()
                }
            }
        }
        .instrument(span)
        .await
    }
}
