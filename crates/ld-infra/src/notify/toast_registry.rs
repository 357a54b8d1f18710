use std::sync::Mutex;

use ld_core::ids::NoticeKey;
use ld_core::notice::{Notice, NoticeKind};
use ld_core::ports::NotifierPort;
use tracing::debug;

/// In-memory keyed toast registry.
///
/// Each pending notice is owned by the key handed back to the caller;
/// dismissal removes exactly that notice. The rendering layer snapshots
/// `active()` whenever it redraws.
pub struct ToastRegistry {
    inner: Mutex<Vec<Notice>>,
}

impl ToastRegistry {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the currently visible notices, oldest first.
    pub fn active(&self) -> Vec<Notice> {
        self.inner.lock().unwrap().clone()
    }

    pub fn pending_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.is_pending())
            .count()
    }

    fn push(&self, notice: Notice) -> NoticeKey {
        let key = notice.key.clone();
        self.inner.lock().unwrap().push(notice);
        key
    }
}

impl Default for ToastRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl NotifierPort for ToastRegistry {
    fn pending(&self, message: &str) -> NoticeKey {
        let key = self.push(Notice::pending(message));
        debug!(%key, "pending notice shown");
        key
    }

    fn dismiss(&self, key: &NoticeKey) {
        self.inner.lock().unwrap().retain(|n| n.key != *key);
        debug!(%key, "notice dismissed");
    }

    fn success(&self, message: &str) {
        self.push(Notice::success(message));
    }

    fn error(&self, message: &str) {
        self.push(Notice::error(message));
    }
}
