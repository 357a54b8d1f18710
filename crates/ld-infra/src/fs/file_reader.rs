use std::path::Path;

use async_trait::async_trait;
use ld_core::ports::{FileReadError, FileSourcePort};
use tokio::fs;
use tracing::debug;

/// Reads a user-selected file into memory as text. The platform file picker
/// hands over a path; the OS releases the underlying resource.
pub struct TokioFileReader;

#[async_trait]
impl FileSourcePort for TokioFileReader {
    async fn read_to_string(&self, path: &Path) -> Result<String, FileReadError> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| FileReadError::Unreadable(e.to_string()))?;

        debug!(path = %path.display(), bytes = content.len(), "file read");
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_the_whole_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<html><body>bookmarks</body></html>").unwrap();

        let content = TokioFileReader
            .read_to_string(file.path())
            .await
            .unwrap();

        assert_eq!(content, "<html><body>bookmarks</body></html>");
    }

    #[tokio::test]
    async fn test_missing_file_is_unreadable() {
        let result = TokioFileReader
            .read_to_string(Path::new("/nonexistent/bookmarks.html"))
            .await;

        assert!(matches!(result, Err(FileReadError::Unreadable(_))));
    }
}
