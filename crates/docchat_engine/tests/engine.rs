use std::io::Write;
use std::time::Duration;

use docchat_engine::{ApiSettings, EngineEvent, EngineHandle, FailureKind};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const EVENT_WAIT: Duration = Duration::from_secs(5);

fn settings_for(server: &MockServer) -> ApiSettings {
    ApiSettings {
        base_url: server.uri(),
        ..ApiSettings::default()
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn query_command_produces_one_completion() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "answer": "X is Y" })))
        .mount(&server)
        .await;

    let (engine, events) = EngineHandle::new(settings_for(&server));
    engine.enqueue_query(7, "What is X?");

    let event = events.recv_timeout(EVENT_WAIT).expect("completion event");
    match event {
        EngineEvent::QueryCompleted { request_id, result } => {
            assert_eq!(request_id, 7);
            assert_eq!(result.expect("answer").text, "X is Y");
        }
        other => panic!("unexpected event: {other:?}"),
    }
    assert!(events.recv_timeout(Duration::from_millis(200)).is_err());
}

#[tokio::test(flavor = "multi_thread")]
async fn upload_command_reads_the_file_and_completes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/upload/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": "success" })),
        )
        .mount(&server)
        .await;

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(b"%PDF-1.4 test").expect("write pdf bytes");

    let (engine, events) = EngineHandle::new(settings_for(&server));
    engine.enqueue_upload("a.pdf", file.path().to_path_buf());

    let event = events.recv_timeout(EVENT_WAIT).expect("completion event");
    match event {
        EngineEvent::UploadCompleted { result } => {
            assert!(result.is_ok());
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn unreadable_file_completes_with_failure_without_a_request() {
    let server = MockServer::start().await;
    // No mock mounted: a request would come back 404 with an empty body and
    // surface as MalformedResponse, so a FileUnreadable failure proves the
    // request was never issued.
    let (engine, events) = EngineHandle::new(settings_for(&server));
    engine.enqueue_upload("ghost.pdf", "/nonexistent/ghost.pdf".into());

    let event = events.recv_timeout(EVENT_WAIT).expect("completion event");
    match event {
        EngineEvent::UploadCompleted { result } => {
            assert_eq!(result.unwrap_err().kind, FailureKind::FileUnreadable);
        }
        other => panic!("unexpected event: {other:?}"),
    }
}
