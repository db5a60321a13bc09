use crate::{
    AppState, ChatError, Effect, Msg, Sender, UploadError, UploadPhase, PDF_CONTENT_TYPE,
};

const PLACEHOLDER_TEXT: &str = "Thinking...";
const UPLOAD_SUCCESS_TEXT: &str = "File uploaded and processed successfully!";
const UPLOAD_WRONG_TYPE_TEXT: &str = "Please upload a PDF file.";
const UPLOAD_TRANSPORT_TEXT: &str = "An error occurred during upload.";
const CHAT_TRANSPORT_TEXT: &str = "Error connecting to server.";
const UNKNOWN_ERROR_TEXT: &str = "Unknown error";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::DraftChanged(draft) => {
            state.set_chat_draft(draft);
            Vec::new()
        }
        Msg::SubmitQuery => {
            let query = state.chat_draft().trim().to_string();
            if query.is_empty() {
                return (state, Vec::new());
            }
            state.append_message(Sender::User, query.clone(), false);
            state.clear_chat_draft();
            let placeholder_id =
                state.append_message(Sender::Assistant, PLACEHOLDER_TEXT.to_string(), true);
            vec![Effect::SendQuery {
                placeholder_id,
                query,
            }]
        }
        Msg::QueryFinished {
            placeholder_id,
            result,
        } => {
            state.remove_placeholder(placeholder_id);
            let text = match result {
                Ok(answer) => answer,
                Err(ChatError::Rejected { message }) => format!(
                    "Sorry, something went wrong: {}",
                    message.as_deref().unwrap_or(UNKNOWN_ERROR_TEXT)
                ),
                Err(ChatError::Transport) => CHAT_TRANSPORT_TEXT.to_string(),
            };
            state.append_message(Sender::Assistant, text, false);
            Vec::new()
        }
        Msg::FileChosen {
            name,
            content_type,
            path,
        } => {
            if content_type != PDF_CONTENT_TYPE {
                state.set_upload_status(UploadPhase::Failed, UPLOAD_WRONG_TYPE_TEXT);
                return (state, Vec::new());
            }
            state.set_upload_status(UploadPhase::Uploading, format!("Uploading {name}..."));
            vec![Effect::UploadFile {
                file_name: name,
                path,
            }]
        }
        Msg::UploadFinished { result } => match result {
            Ok(()) => {
                state.set_upload_status(UploadPhase::Succeeded, UPLOAD_SUCCESS_TEXT);
                vec![Effect::FocusChatInput]
            }
            Err(UploadError::Rejected { message }) => {
                state.set_upload_status(
                    UploadPhase::Failed,
                    format!(
                        "Upload failed: {}",
                        message.as_deref().unwrap_or(UNKNOWN_ERROR_TEXT)
                    ),
                );
                Vec::new()
            }
            Err(UploadError::Transport) => {
                state.set_upload_status(UploadPhase::Failed, UPLOAD_TRANSPORT_TEXT);
                Vec::new()
            }
        },
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
