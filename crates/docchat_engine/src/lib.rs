//! Docchat engine: backend API client and effect execution.
mod client;
mod engine;
mod markup;
mod types;

pub use client::{ApiSettings, BackendApi, ReqwestApi};
pub use engine::EngineHandle;
pub use markup::{render_markup, LineKind, MarkupLine};
pub use types::{ApiFailure, ChatAnswer, EngineEvent, FailureKind, RequestId, UploadOutcome};
