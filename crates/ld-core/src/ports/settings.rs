use anyhow::Result;

use crate::settings::DashboardSettings;

#[async_trait::async_trait]
pub trait SettingsPort: Send + Sync {
    async fn load(&self) -> Result<DashboardSettings>;
    async fn save(&self, settings: &DashboardSettings) -> Result<()>;
}
