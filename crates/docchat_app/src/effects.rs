use std::sync::mpsc;
use std::thread;

use client_logging::{client_info, client_warn, preview};
use docchat_core::{ChatError, Effect, Msg, UploadError};
use docchat_engine::{ApiFailure, ApiSettings, EngineEvent, EngineHandle, FailureKind};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>, settings: ApiSettings) -> Self {
        let (engine, event_rx) = EngineHandle::new(settings);
        spawn_event_loop(event_rx, msg_tx);
        Self { engine }
    }

    /// Hands an effect to the engine. `FocusChatInput` is a shell concern and
    /// is handled before effects reach this point.
    pub fn run(&self, effect: Effect) {
        match effect {
            Effect::UploadFile { file_name, path } => {
                client_info!("UploadFile name={} path={:?}", file_name, path);
                self.engine.enqueue_upload(file_name, path);
            }
            Effect::SendQuery {
                placeholder_id,
                query,
            } => {
                client_info!(
                    "SendQuery id={} len={} preview={}",
                    placeholder_id,
                    query.len(),
                    preview(&query, 32)
                );
                self.engine.enqueue_query(placeholder_id, query);
            }
            Effect::FocusChatInput => {}
        }
    }
}

fn spawn_event_loop(event_rx: mpsc::Receiver<EngineEvent>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Ok(event) = event_rx.recv() {
            let msg = match event {
                EngineEvent::UploadCompleted { result } => Msg::UploadFinished {
                    result: result.map(|_| ()).map_err(map_upload_error),
                },
                EngineEvent::QueryCompleted { request_id, result } => Msg::QueryFinished {
                    placeholder_id: request_id,
                    result: result.map(|answer| answer.text).map_err(map_chat_error),
                },
            };
            if msg_tx.send(msg).is_err() {
                break;
            }
        }
    });
}

// Only server-reported rejections reach the user with detail; everything
// else collapses to a transport failure and the detail goes to the log.
fn map_upload_error(failure: ApiFailure) -> UploadError {
    let ApiFailure { kind, detail } = failure;
    match kind {
        FailureKind::Rejected { message } => UploadError::Rejected { message },
        kind => {
            client_warn!("Upload failed: {}: {}", kind, detail);
            UploadError::Transport
        }
    }
}

fn map_chat_error(failure: ApiFailure) -> ChatError {
    let ApiFailure { kind, detail } = failure;
    match kind {
        FailureKind::Rejected { message } => ChatError::Rejected { message },
        kind => {
            client_warn!("Query failed: {}: {}", kind, detail);
            ChatError::Transport
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_keeps_the_server_message() {
        let failure = ApiFailure {
            kind: FailureKind::Rejected {
                message: Some("Ingest failed".to_string()),
            },
            detail: "upload rejected".to_string(),
        };
        assert_eq!(
            map_upload_error(failure),
            UploadError::Rejected {
                message: Some("Ingest failed".to_string())
            }
        );
    }

    #[test]
    fn transport_kinds_collapse() {
        for kind in [
            FailureKind::Network,
            FailureKind::Timeout,
            FailureKind::MalformedResponse,
            FailureKind::FileUnreadable,
        ] {
            let failure = ApiFailure {
                kind,
                detail: "detail".to_string(),
            };
            assert_eq!(map_chat_error(failure), ChatError::Transport);
        }
    }
}
