use anyhow::Result;

/// Signals the external data layer to reload everything after a successful
/// import.
#[async_trait::async_trait]
pub trait ReloadPort: Send + Sync {
    async fn request_reload(&self) -> Result<()>;
}
