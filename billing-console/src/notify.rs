//! User-visible notifications
//!
//! The toast layer is an external collaborator; the reporting core only
//! hands it [`Notice`]s through the [`Notifier`] trait.

use crate::error::{FailureKind, ReportError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub detail: Option<String>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
            detail: None,
        }
    }

    /// One notice per failed operation; auth failures ask the user to sign in again.
    pub fn failure(message: impl Into<String>, err: &ReportError) -> Self {
        let message = message.into();
        let message = match err.kind() {
            FailureKind::Auth => format!("{message}: please sign in again"),
            _ => message,
        };
        Self {
            level: NoticeLevel::Error,
            message,
            detail: Some(err.to_string()),
        }
    }
}

/// Sink for user-visible notifications
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Notifier that writes notices to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => tracing::info!(message = %notice.message, "notice"),
            NoticeLevel::Error => tracing::error!(
                message = %notice.message,
                detail = notice.detail.as_deref().unwrap_or_default(),
                "notice"
            ),
        }
    }
}
