//! Docchat core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{ChatError, Msg, UploadError};
pub use state::{AppState, Message, MessageId, Sender, UploadPhase, PDF_CONTENT_TYPE};
pub use update::update;
pub use view_model::{AppViewModel, MessageRowView, UploadStatusView};
