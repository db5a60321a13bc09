use std::path::PathBuf;
use std::sync::Once;

use docchat_core::{update, AppState, Effect, Msg, UploadError, UploadPhase};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

fn choose_file(state: AppState, name: &str, content_type: &str) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::FileChosen {
            name: name.to_string(),
            content_type: content_type.to_string(),
            path: PathBuf::from(format!("/tmp/{name}")),
        },
    )
}

#[test]
fn non_pdf_file_is_rejected_without_effects() {
    init_logging();
    let (state, effects) = choose_file(AppState::new(), "notes.txt", "text/plain");
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(view.upload.phase, UploadPhase::Failed);
    assert_eq!(view.upload.text, "Please upload a PDF file.");
    assert!(view.dirty);
}

#[test]
fn pdf_file_starts_the_upload() {
    init_logging();
    let (state, effects) = choose_file(AppState::new(), "a.pdf", "application/pdf");
    let view = state.view();

    assert_eq!(view.upload.phase, UploadPhase::Uploading);
    assert_eq!(view.upload.text, "Uploading a.pdf...");
    assert_eq!(
        effects,
        vec![Effect::UploadFile {
            file_name: "a.pdf".to_string(),
            path: PathBuf::from("/tmp/a.pdf"),
        }]
    );
}

#[test]
fn successful_upload_focuses_the_chat_input() {
    init_logging();
    let (state, _) = choose_file(AppState::new(), "a.pdf", "application/pdf");

    let (state, effects) = update(state, Msg::UploadFinished { result: Ok(()) });
    let view = state.view();

    assert_eq!(view.upload.phase, UploadPhase::Succeeded);
    assert_eq!(view.upload.text, "File uploaded and processed successfully!");
    assert_eq!(effects, vec![Effect::FocusChatInput]);
}

#[test]
fn rejected_upload_surfaces_the_server_message() {
    init_logging();
    let (state, _) = choose_file(AppState::new(), "a.pdf", "application/pdf");

    let (state, effects) = update(
        state,
        Msg::UploadFinished {
            result: Err(UploadError::Rejected {
                message: Some("Ingest failed".to_string()),
            }),
        },
    );
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(view.upload.phase, UploadPhase::Failed);
    assert_eq!(view.upload.text, "Upload failed: Ingest failed");
}

#[test]
fn rejected_upload_without_message_uses_default() {
    init_logging();
    let (state, _) = choose_file(AppState::new(), "a.pdf", "application/pdf");

    let (state, _) = update(
        state,
        Msg::UploadFinished {
            result: Err(UploadError::Rejected { message: None }),
        },
    );

    assert_eq!(state.view().upload.text, "Upload failed: Unknown error");
}

#[test]
fn transport_failure_surfaces_generic_message() {
    init_logging();
    let (state, _) = choose_file(AppState::new(), "a.pdf", "application/pdf");

    let (state, effects) = update(
        state,
        Msg::UploadFinished {
            result: Err(UploadError::Transport),
        },
    );
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(view.upload.phase, UploadPhase::Failed);
    assert_eq!(view.upload.text, "An error occurred during upload.");
}

#[test]
fn upload_flow_leaves_chat_untouched() {
    init_logging();
    let (state, _) = choose_file(AppState::new(), "a.pdf", "application/pdf");
    let (state, _) = update(state, Msg::UploadFinished { result: Ok(()) });

    assert!(state.view().messages.is_empty());
}
