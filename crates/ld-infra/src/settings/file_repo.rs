use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::warn;

use ld_core::{
    ports::SettingsPort,
    settings::{DashboardSettings, CURRENT_SCHEMA_VERSION},
};

/// JSON file repository for the dashboard settings.
///
/// The settings are a convenience, not data: a missing, corrupt, or
/// future-versioned file degrades to defaults instead of failing the load.
pub struct FileSettingsRepository {
    path: PathBuf,
}

impl FileSettingsRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn dir(&self) -> Option<&Path> {
        self.path.parent()
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.dir() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create settings dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    /// Write via a temp file and rename, so the target is always either the
    /// previous contents or the fully written new contents.
    async fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp settings failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp settings to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl SettingsPort for FileSettingsRepository {
    async fn load(&self) -> Result<DashboardSettings> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(DashboardSettings::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read settings failed: {}", self.path.display()))
            }
        };

        let settings: DashboardSettings = match serde_json::from_str(&content) {
            Ok(settings) => settings,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "invalid settings file, using defaults");
                return Ok(DashboardSettings::default());
            }
        };

        if settings.schema_version != CURRENT_SCHEMA_VERSION {
            warn!(
                found = settings.schema_version,
                expected = CURRENT_SCHEMA_VERSION,
                "unknown settings schema version, using defaults"
            );
            return Ok(DashboardSettings::default());
        }

        Ok(settings)
    }

    async fn save(&self, settings: &DashboardSettings) -> Result<()> {
        let content =
            serde_json::to_string_pretty(settings).context("serialize settings failed")?;

        self.atomic_write(&content).await
    }
}
