//! Use case for persisting changed dashboard settings.

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, info_span, Instrument};

use ld_core::ports::SettingsPort;
use ld_core::settings::{DashboardSettings, CURRENT_SCHEMA_VERSION};

pub struct UpdateDashboardSettings {
    settings: Arc<dyn SettingsPort>,
}

impl UpdateDashboardSettings {
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    pub async fn execute(&self, settings: DashboardSettings) -> Result<()> {
        let span = info_span!("usecase.update_dashboard_settings.execute");

        async {
            if settings.schema_version != CURRENT_SCHEMA_VERSION {
                return Err(anyhow::anyhow!(
                    "Invalid schema version: expected {}, got {}",
                    CURRENT_SCHEMA_VERSION,
                    settings.schema_version
                ));
            }

            self.settings.save(&settings).await?;

            info!(layout = ?settings.layout, columns = ?settings.columns, "settings updated");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
