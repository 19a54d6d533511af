//! Reporting error types
//!
//! Every failure the reporting core can see collapses into one of a few
//! kinds; the kind decides how it is surfaced, never whether the app
//! keeps running.

use billing_client::ClientError;
use shared::DateRangeError;
use thiserror::Error;

/// Failure taxonomy of the reporting core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Request never reached the server, never came back, or came back non-2xx
    Network,
    /// 401 / 403
    Auth,
    /// Rejected locally before anything was dispatched
    Validation,
    /// Writing the exported file or reading it back failed
    Storage,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Validation error: {0}")]
    Validation(#[from] DateRangeError),

    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReportError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ReportError::Validation(_) => FailureKind::Validation,
            ReportError::Client(e) => FailureKind::from(e),
            ReportError::Csv(_) | ReportError::Io(_) => FailureKind::Storage,
        }
    }
}

impl From<&ClientError> for FailureKind {
    fn from(err: &ClientError) -> Self {
        if err.is_auth() {
            FailureKind::Auth
        } else {
            FailureKind::Network
        }
    }
}

pub type ReportResult<T> = Result<T, ReportError>;
