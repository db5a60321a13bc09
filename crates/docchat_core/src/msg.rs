use std::path::PathBuf;

use crate::MessageId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the chat input; carries the full current text.
    DraftChanged(String),
    /// User submitted the current draft (Enter or the send control).
    SubmitQuery,
    /// The backend answered (or failed to answer) a query.
    QueryFinished {
        placeholder_id: MessageId,
        result: Result<String, ChatError>,
    },
    /// User picked or dropped a file for upload.
    FileChosen {
        name: String,
        content_type: String,
        path: PathBuf,
    },
    /// The upload request completed.
    UploadFinished { result: Result<(), UploadError> },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}

/// How a query failed, as far as the user is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// The backend returned a body without an answer; `message` is its
    /// `error` field when present.
    Rejected { message: Option<String> },
    /// The request never produced a usable response (network, timeout,
    /// unparseable body). Detail lives in the log, not in the bubble.
    Transport,
}

/// How an upload failed, mirroring [`ChatError`] for the other endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// The backend reported a non-success status; `message` is its
    /// `message` field when present.
    Rejected { message: Option<String> },
    /// The request never produced a usable response.
    Transport,
}
