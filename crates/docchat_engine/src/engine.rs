use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;

use client_logging::client_error;

use crate::client::{ApiSettings, BackendApi, ReqwestApi};
use crate::{ApiFailure, EngineEvent, FailureKind, RequestId};

enum EngineCommand {
    Upload { file_name: String, path: PathBuf },
    Query { request_id: RequestId, query: String },
}

/// Handle to the engine thread. Cloneable; events arrive on the receiver
/// returned by [`EngineHandle::new`], one completion per command.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: ApiSettings) -> (Self, mpsc::Receiver<EngineEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let api = Arc::new(ReqwestApi::new(settings));

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    client_error!("Failed to start engine runtime: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn enqueue_upload(&self, file_name: impl Into<String>, path: PathBuf) {
        let _ = self.cmd_tx.send(EngineCommand::Upload {
            file_name: file_name.into(),
            path,
        });
    }

    pub fn enqueue_query(&self, request_id: RequestId, query: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Query {
            request_id,
            query: query.into(),
        });
    }
}

async fn handle_command(
    api: &dyn BackendApi,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Upload { file_name, path } => {
            let result = match tokio::fs::read(&path).await {
                Ok(bytes) => api.upload(&file_name, bytes).await,
                Err(err) => Err(ApiFailure::new(FailureKind::FileUnreadable, err.to_string())),
            };
            let _ = event_tx.send(EngineEvent::UploadCompleted { result });
        }
        EngineCommand::Query { request_id, query } => {
            let result = api.query(&query).await;
            let _ = event_tx.send(EngineEvent::QueryCompleted { request_id, result });
        }
    }
}
