//! Use case for importing bookmarks from an external export file.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing::{info, info_span, warn, Instrument};

use ld_core::migration::{ImportOutcome, MigrationFormat, MigrationRequest};
use ld_core::ports::{
    DelayPort, FileSourcePort, MigrationError, MigrationGatewayPort, NotifierPort, ReloadPort,
};

/// Delay between the success notice and the full data reload, so the user
/// sees the notice before the reload takes effect.
pub const RELOAD_DELAY_MS: u64 = 2_000;

const PENDING_MESSAGE: &str = "Importing...";
const SUCCESS_MESSAGE: &str = "Imported the Bookmarks! Reloading the page...";
const READ_ERROR_MESSAGE: &str =
    "Failed to read the file. Please make sure the file is correct and try again.";
const EMPTY_FILE_MESSAGE: &str = "The selected file is empty. Nothing was imported.";
const TRANSPORT_ERROR_MESSAGE: &str =
    "An error occurred while importing bookmarks. Please check the logs for more info.";
const REJECTED_FALLBACK_MESSAGE: &str = "Failed to import bookmarks. Please try again.";

/// Use case for one import submission.
///
/// Reads the selected file, wraps it with the declared format tag, submits
/// it once, and turns the result into the pending/resolved notification
/// sequence. Invocations are independent: each owns its own notice key, so
/// concurrent imports never disturb each other's toasts.
pub struct ImportBookmarks {
    files: Arc<dyn FileSourcePort>,
    gateway: Arc<dyn MigrationGatewayPort>,
    notifier: Arc<dyn NotifierPort>,
    delay: Arc<dyn DelayPort>,
    reload: Arc<dyn ReloadPort>,
}

impl ImportBookmarks {
    pub fn new(
        files: Arc<dyn FileSourcePort>,
        gateway: Arc<dyn MigrationGatewayPort>,
        notifier: Arc<dyn NotifierPort>,
        delay: Arc<dyn DelayPort>,
        reload: Arc<dyn ReloadPort>,
    ) -> Self {
        Self {
            files,
            gateway,
            notifier,
            delay,
            reload,
        }
    }

    /// Execute the use case.
    ///
    /// `file` is `None` when the user cancelled the picker; that is a silent
    /// no-op and returns `None`. Every other path settles into exactly one
    /// terminal [`ImportOutcome`], with the pending notice dismissed before
    /// the resolved one appears.
    pub async fn execute(
        &self,
        file: Option<&Path>,
        format: MigrationFormat,
    ) -> Result<Option<ImportOutcome>> {
        let span = info_span!("usecase.import_bookmarks.execute", format = %format);

        async {
            let Some(path) = file else {
                return Ok(None);
            };

            let content = match self.files.read_to_string(path).await {
                Ok(content) => content,
                Err(error) => {
                    warn!(path = %path.display(), %error, "import file unreadable");
                    self.notifier.error(READ_ERROR_MESSAGE);
                    return Ok(Some(ImportOutcome::Failed(READ_ERROR_MESSAGE.to_string())));
                }
            };

            let request = match MigrationRequest::new(format, content) {
                Ok(request) => request,
                Err(_) => {
                    warn!(path = %path.display(), "import file decoded to an empty payload");
                    self.notifier.error(EMPTY_FILE_MESSAGE);
                    return Ok(Some(ImportOutcome::Failed(EMPTY_FILE_MESSAGE.to_string())));
                }
            };

            let key = self.notifier.pending(PENDING_MESSAGE);

            let outcome = match self.gateway.submit(&request).await {
                Ok(()) => {
                    self.notifier.dismiss(&key);
                    self.notifier.success(SUCCESS_MESSAGE);
                    info!("import accepted, scheduling reload");

                    self.delay.delay_ms(RELOAD_DELAY_MS).await;
                    if let Err(error) = self.reload.request_reload().await {
                        warn!(%error, "reload request failed after successful import");
                    }
                    ImportOutcome::Succeeded
                }
                Err(MigrationError::Rejected { message }) => {
                    self.notifier.dismiss(&key);
                    let message = message.unwrap_or_else(|| REJECTED_FALLBACK_MESSAGE.to_string());
                    warn!(%message, "import rejected by server");
                    self.notifier.error(&message);
                    ImportOutcome::Failed(message)
                }
                Err(MigrationError::Transport(error)) => {
                    self.notifier.dismiss(&key);
                    warn!(%error, "import transport failure");
                    self.notifier.error(TRANSPORT_ERROR_MESSAGE);
                    ImportOutcome::Failed(TRANSPORT_ERROR_MESSAGE.to_string())
                }
            };

            Ok(Some(outcome))
        }
        .instrument(span)
        .await
    }
}
