use std::path::PathBuf;

use crate::MessageId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue the multipart upload request for a validated file.
    UploadFile { file_name: String, path: PathBuf },
    /// Issue the query request; `placeholder_id` correlates the completion
    /// with the pending bubble it replaces.
    SendQuery {
        placeholder_id: MessageId,
        query: String,
    },
    /// Move keyboard focus to the chat input (emitted after a successful
    /// upload).
    FocusChatInput,
}
