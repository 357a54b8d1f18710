//! End-to-end tests for the import workflow: real file reader, real toast
//! registry, real delay scheduler under paused virtual time, mock gateway.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ld_app::usecases::import::import_bookmarks::RELOAD_DELAY_MS;
use ld_app::ImportBookmarks;
use ld_core::migration::{ImportOutcome, MigrationFormat, MigrationRequest};
use ld_core::notice::NoticeKind;
use ld_core::ports::{MigrationError, MigrationGatewayPort, ReloadPort};
use ld_infra::{ToastRegistry, TokioDelay, TokioFileReader};
use tokio::sync::Notify;
use tokio::time::{Duration, Instant};

struct StubGateway {
    response: Result<(), MigrationError>,
    submissions: Mutex<Vec<MigrationRequest>>,
    /// When set, the submission parks here until released, holding the
    /// pending notice visible.
    gate: Option<Arc<Notify>>,
}

impl StubGateway {
    fn accepting() -> Self {
        Self {
            response: Ok(()),
            submissions: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    fn rejecting(message: &str) -> Self {
        Self {
            response: Err(MigrationError::Rejected {
                message: Some(message.to_string()),
            }),
            submissions: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::accepting()
        }
    }
}

#[async_trait]
impl MigrationGatewayPort for StubGateway {
    async fn submit(&self, request: &MigrationRequest) -> Result<(), MigrationError> {
        self.submissions.lock().unwrap().push(request.clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        match &self.response {
            Ok(()) => Ok(()),
            Err(MigrationError::Rejected { message }) => Err(MigrationError::Rejected {
                message: message.clone(),
            }),
            Err(MigrationError::Transport(e)) => Err(MigrationError::Transport(e.clone())),
        }
    }
}

#[derive(Default)]
struct RecordingReload {
    count: AtomicUsize,
}

#[async_trait]
impl ReloadPort for RecordingReload {
    async fn request_reload(&self) -> anyhow::Result<()> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn export_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

fn usecase(
    gateway: Arc<StubGateway>,
    toasts: Arc<ToastRegistry>,
    reload: Arc<RecordingReload>,
) -> ImportBookmarks {
    ImportBookmarks::new(
        Arc::new(TokioFileReader),
        gateway,
        toasts,
        Arc::new(TokioDelay),
        reload,
    )
}

#[tokio::test(start_paused = true)]
async fn test_html_import_succeeds_and_reloads_after_the_delay() {
    let file = export_file("<html></html>");
    let gateway = Arc::new(StubGateway::accepting());
    let toasts = Arc::new(ToastRegistry::new());
    let reload = Arc::new(RecordingReload::default());
    let usecase = usecase(gateway.clone(), toasts.clone(), reload.clone());

    let start = Instant::now();
    let outcome = usecase
        .execute(Some(file.path()), MigrationFormat::HtmlFile)
        .await
        .unwrap();

    assert_eq!(outcome, Some(ImportOutcome::Succeeded));

    // The submission carried the declared format and the raw markup
    let submissions = gateway.submissions.lock().unwrap();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].format, MigrationFormat::HtmlFile);
    assert_eq!(submissions[0].data, "<html></html>");

    // The reload signal fired once, after the fixed delay
    assert_eq!(reload.count.load(Ordering::SeqCst), 1);
    assert!(start.elapsed() >= Duration::from_millis(RELOAD_DELAY_MS));

    // No stuck spinner: only the success notice remains
    let notices = toasts.active();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Success);
}

#[tokio::test(start_paused = true)]
async fn test_rejected_import_surfaces_the_message_and_never_reloads() {
    let file = export_file("<html></html>");
    let gateway = Arc::new(StubGateway::rejecting("bad format"));
    let toasts = Arc::new(ToastRegistry::new());
    let reload = Arc::new(RecordingReload::default());
    let usecase = usecase(gateway, toasts.clone(), reload.clone());

    let start = Instant::now();
    let outcome = usecase
        .execute(Some(file.path()), MigrationFormat::HtmlFile)
        .await
        .unwrap();

    assert_eq!(outcome, Some(ImportOutcome::Failed("bad format".to_string())));
    assert_eq!(reload.count.load(Ordering::SeqCst), 0);
    // The reload delay never ran
    assert!(start.elapsed() < Duration::from_millis(RELOAD_DELAY_MS));

    let notices = toasts.active();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Error);
    assert_eq!(notices[0].message, "bad format");
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_imports_keep_their_own_toasts() {
    let first_file = export_file("{\"collections\":[]}");
    let second_file = export_file("<html></html>");
    let gate = Arc::new(Notify::new());
    let gateway = Arc::new(StubGateway::gated(gate.clone()));
    let toasts = Arc::new(ToastRegistry::new());
    let reload = Arc::new(RecordingReload::default());
    let usecase = Arc::new(usecase(gateway, toasts.clone(), reload.clone()));

    let first = {
        let usecase = usecase.clone();
        let path = first_file.path().to_path_buf();
        tokio::spawn(async move {
            usecase
                .execute(Some(&path), MigrationFormat::Linkwarden)
                .await
                .unwrap()
        })
    };
    let second = {
        let usecase = usecase.clone();
        let path = second_file.path().to_path_buf();
        tokio::spawn(async move {
            usecase
                .execute(Some(&path), MigrationFormat::HtmlFile)
                .await
                .unwrap()
        })
    };

    // Both invocations are parked at the gateway with their own pending key
    while toasts.pending_count() < 2 {
        tokio::task::yield_now().await;
    }

    gate.notify_one();
    gate.notify_one();

    assert_eq!(first.await.unwrap(), Some(ImportOutcome::Succeeded));
    assert_eq!(second.await.unwrap(), Some(ImportOutcome::Succeeded));

    // Each invocation dismissed its own pending notice; both successes stand
    assert_eq!(toasts.pending_count(), 0);
    let kinds: Vec<NoticeKind> = toasts.active().iter().map(|n| n.kind).collect();
    assert_eq!(kinds, vec![NoticeKind::Success, NoticeKind::Success]);
    assert_eq!(reload.count.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_picker_leaves_no_trace() {
    let gateway = Arc::new(StubGateway::accepting());
    let toasts = Arc::new(ToastRegistry::new());
    let reload = Arc::new(RecordingReload::default());
    let usecase = usecase(gateway.clone(), toasts.clone(), reload.clone());

    let outcome = usecase
        .execute(None, MigrationFormat::Omnivore)
        .await
        .unwrap();

    assert_eq!(outcome, None);
    assert!(toasts.active().is_empty());
    assert!(gateway.submissions.lock().unwrap().is_empty());
    assert_eq!(reload.count.load(Ordering::SeqCst), 0);
}
