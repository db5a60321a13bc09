use crate::{MessageId, Sender, UploadPhase};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub messages: Vec<MessageRowView>,
    pub chat_draft: String,
    pub upload: UploadStatusView,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRowView {
    pub id: MessageId,
    pub sender: Sender,
    pub text: String,
    pub pending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadStatusView {
    pub phase: UploadPhase,
    pub text: String,
}
