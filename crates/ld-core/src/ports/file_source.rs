use std::path::Path;

use crate::ports::errors::FileReadError;

/// Reads a user-selected file into memory as text. The underlying resource
/// is released by the platform file API, not managed here.
#[async_trait::async_trait]
pub trait FileSourcePort: Send + Sync {
    async fn read_to_string(&self, path: &Path) -> Result<String, FileReadError>;
}
