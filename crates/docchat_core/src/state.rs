use crate::view_model::{AppViewModel, MessageRowView, UploadStatusView};

/// The one content type the upload controller accepts.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

pub type MessageId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// One rendered chat turn entry. `pending` marks the transient placeholder
/// shown while a query is in flight; placeholders are the only messages ever
/// removed, everything else is append-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub sender: Sender,
    pub text: String,
    pub pending: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadPhase {
    #[default]
    Idle,
    Uploading,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    messages: Vec<Message>,
    next_message_id: MessageId,
    chat_draft: String,
    upload_phase: UploadPhase,
    upload_text: String,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            messages: self
                .messages
                .iter()
                .map(|message| MessageRowView {
                    id: message.id,
                    sender: message.sender,
                    text: message.text.clone(),
                    pending: message.pending,
                })
                .collect(),
            chat_draft: self.chat_draft.clone(),
            upload: UploadStatusView {
                phase: self.upload_phase,
                text: self.upload_text.clone(),
            },
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn chat_draft(&self) -> &str {
        &self.chat_draft
    }

    pub(crate) fn set_chat_draft(&mut self, draft: String) {
        if self.chat_draft != draft {
            self.chat_draft = draft;
            self.mark_dirty();
        }
    }

    pub(crate) fn clear_chat_draft(&mut self) {
        self.chat_draft.clear();
    }

    /// Appends a message and returns its id. Ids come from a monotonic
    /// counter, never from wall-clock time, so rapid sends cannot collide.
    pub(crate) fn append_message(
        &mut self,
        sender: Sender,
        text: String,
        pending: bool,
    ) -> MessageId {
        self.next_message_id += 1;
        let id = self.next_message_id;
        self.messages.push(Message {
            id,
            sender,
            text,
            pending,
        });
        self.mark_dirty();
        id
    }

    /// Removes the pending placeholder with the given id, if it is still
    /// present. A second completion for the same id is a no-op.
    pub(crate) fn remove_placeholder(&mut self, id: MessageId) -> bool {
        let before = self.messages.len();
        self.messages
            .retain(|message| !(message.id == id && message.pending));
        let removed = self.messages.len() != before;
        if removed {
            self.mark_dirty();
        }
        removed
    }

    pub(crate) fn set_upload_status(&mut self, phase: UploadPhase, text: impl Into<String>) {
        self.upload_phase = phase;
        self.upload_text = text.into();
        self.mark_dirty();
    }
}
