use std::time::Duration;

use reqwest::multipart;
use serde_json::{json, Value};

use crate::{ApiFailure, ChatAnswer, FailureKind, UploadOutcome};

const UPLOAD_PATH: &str = "/api/upload/";
const CHAT_PATH: &str = "/api/chat/";
const PDF_CONTENT_TYPE: &str = "application/pdf";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait BackendApi: Send + Sync {
    async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<UploadOutcome, ApiFailure>;
    async fn query(&self, query: &str) -> Result<ChatAnswer, ApiFailure>;
}

#[derive(Debug, Clone)]
pub struct ReqwestApi {
    settings: ApiSettings,
}

impl ReqwestApi {
    pub fn new(settings: ApiSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ApiFailure> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| ApiFailure::new(FailureKind::Network, err.to_string()))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.settings.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait::async_trait]
impl BackendApi for ReqwestApi {
    async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<UploadOutcome, ApiFailure> {
        let client = self.build_client()?;
        let part = multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(PDF_CONTENT_TYPE)
            .map_err(|err| ApiFailure::new(FailureKind::Network, err.to_string()))?;
        let form = multipart::Form::new().part("file", part);

        let response = client
            .post(self.endpoint(UPLOAD_PATH))
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        // The body is parsed regardless of HTTP status; the backend reports
        // its failures as JSON bodies on 4xx/5xx responses.
        let body: Value = response
            .json()
            .await
            .map_err(|err| ApiFailure::new(FailureKind::MalformedResponse, err.to_string()))?;

        let message = body["message"].as_str().map(str::to_string);
        if body["status"] == "success" {
            Ok(UploadOutcome { message })
        } else {
            Err(ApiFailure::new(
                FailureKind::Rejected { message },
                "upload rejected",
            ))
        }
    }

    async fn query(&self, query: &str) -> Result<ChatAnswer, ApiFailure> {
        let client = self.build_client()?;
        let response = client
            .post(self.endpoint(CHAT_PATH))
            .json(&json!({ "query": query }))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let body: Value = response
            .json()
            .await
            .map_err(|err| ApiFailure::new(FailureKind::MalformedResponse, err.to_string()))?;

        match body["answer"].as_str() {
            Some(answer) => Ok(ChatAnswer {
                text: answer.to_string(),
            }),
            None => Err(ApiFailure::new(
                FailureKind::Rejected {
                    message: body["error"].as_str().map(str::to_string),
                },
                "query rejected",
            )),
        }
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiFailure {
    if err.is_timeout() {
        return ApiFailure::new(FailureKind::Timeout, err.to_string());
    }
    ApiFailure::new(FailureKind::Network, err.to_string())
}
