/// Analysis client — the single point of entry for calls to the resume analysis backend.
///
/// The backend is an opaque collaborator: one multipart POST in, one review (or an
/// error payload) out. Handlers and the upload flow only see the `ResumeAnalyzer`
/// trait so they can run against a stub in tests.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{multipart, Client};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{Review, SelectedFile};

/// Shown when the backend gives no usable detail about a failure.
pub const FALLBACK_MESSAGE: &str = "Failed to analyze resume.";

/// Multipart field the backend reads the PDF from.
const FILE_FIELD: &str = "file";

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Api { status: u16, detail: Option<String> },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl AnalysisError {
    /// The message shown inline under the upload box.
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::Api {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => FALLBACK_MESSAGE.to_string(),
        }
    }
}

/// `submit(file) -> Review | error`. Implement this to swap backends.
///
/// Carried in `AppState` as `Arc<dyn ResumeAnalyzer>`.
#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn submit(&self, file: &SelectedFile) -> Result<Review, AnalysisError>;
}

/// reqwest-backed analyzer posting to a fixed endpoint.
#[derive(Clone)]
pub struct HttpAnalyzer {
    client: Client,
    endpoint: String,
}

impl HttpAnalyzer {
    /// `timeout: None` leaves the request unbounded (reqwest's default).
    pub fn new(endpoint: String, timeout: Option<Duration>) -> Result<Self, AnalysisError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ResumeAnalyzer for HttpAnalyzer {
    async fn submit(&self, file: &SelectedFile) -> Result<Review, AnalysisError> {
        let part = multipart::Part::bytes(file.bytes.to_vec())
            .file_name(file.file_name.clone())
            .mime_str(crate::models::upload::PDF_MEDIA_TYPE)?;
        let form = multipart::Form::new().part(FILE_FIELD, part);

        info!(
            "Submitting '{}' ({} bytes) to {}",
            file.file_name,
            file.size(),
            self.endpoint
        );

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Analysis backend returned {}: {}", status, body);
            return Err(AnalysisError::Api {
                status: status.as_u16(),
                detail: extract_detail(&body),
            });
        }

        let review = decode_review(&body)?;
        debug!(
            "Analysis succeeded: verdict={}, score={}",
            review.verdict, review.score
        );
        Ok(review)
    }
}

/// Decodes a success body. Accepts the review object itself or a JSON string
/// wrapping it, since the backend has been seen to double-encode.
fn decode_review(body: &str) -> Result<Review, serde_json::Error> {
    match serde_json::from_str::<Value>(body)? {
        Value::String(inner) => serde_json::from_str(&inner),
        value => serde_json::from_value(value),
    }
}

/// Pulls a human-readable `detail` string out of an error body.
fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
