use std::fmt;

use thiserror::Error;

pub type RequestId = u64;

/// Completion events emitted by the engine thread. Every command produces
/// exactly one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    UploadCompleted {
        result: Result<UploadOutcome, ApiFailure>,
    },
    QueryCompleted {
        request_id: RequestId,
        result: Result<ChatAnswer, ApiFailure>,
    },
}

/// A successful upload; `message` is the server's optional confirmation text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatAnswer {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {detail}")]
pub struct ApiFailure {
    pub kind: FailureKind,
    pub detail: String,
}

impl ApiFailure {
    pub(crate) fn new(kind: FailureKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// The backend answered with a well-formed body that reports failure.
    Rejected { message: Option<String> },
    /// The response body could not be parsed as JSON.
    MalformedResponse,
    Timeout,
    Network,
    /// The local file could not be read before the upload was issued.
    FileUnreadable,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Rejected { message } => match message {
                Some(message) => write!(f, "rejected by server ({message})"),
                None => write!(f, "rejected by server"),
            },
            FailureKind::MalformedResponse => write!(f, "malformed response"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::FileUnreadable => write!(f, "file unreadable"),
        }
    }
}
