//! Keyed UI notifications.
//!
//! Each operation owns a unique key; dismiss targets that key only, so
//! concurrent operations never disturb each other's toasts.

use serde::{Deserialize, Serialize};

use crate::ids::NoticeKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Pending,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub key: NoticeKey,
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn pending(message: impl Into<String>) -> Self {
        Self {
            key: NoticeKey::new(),
            kind: NoticeKind::Pending,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            key: NoticeKey::new(),
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            key: NoticeKey::new(),
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.kind == NoticeKind::Pending
    }
}
