//! Blocking REST client for the question-search backend.
//!
//! Three endpoints, all JSON: similar-question search, single-question
//! search, and the recent-search history. Matching and reranking happen
//! server side; this module only shuttles typed payloads.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::json;

use crate::types::{QuestionSearch, RecentEntry, RecentEnvelope, SimilarSearch};

pub const DEFAULT_BASE_URL: &str = "http://localhost:4000/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Shown when the server gives no usable error message of its own.
const FALLBACK_MESSAGE: &str = "Failed to search question. Please try again.";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("could not decode response body")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    /// Message suitable for the status line: the server's own `error`
    /// string when it sent one, otherwise a generic fallback.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message,
            _ => FALLBACK_MESSAGE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let mut base_url = base_url.to_string();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self { base_url, http })
    }

    /// `POST /questions/search-similar`: list of matching questions plus
    /// the AI-reranked permutation.
    pub fn search_similar(&self, query: &str) -> Result<SimilarSearch, ApiError> {
        self.post_question("/questions/search-similar", query)
    }

    /// `POST /questions/search`: one question with its answers, original
    /// and reranked.
    pub fn search_question(&self, query: &str) -> Result<QuestionSearch, ApiError> {
        self.post_question("/questions/search", query)
    }

    /// `GET /questions/recent`: backend-maintained search history.
    pub fn recent_questions(&self) -> Result<Vec<RecentEntry>, ApiError> {
        let response = self
            .http
            .get(self.endpoint("/questions/recent"))
            .send()?;
        let envelope: RecentEnvelope = decode(response)?;
        Ok(envelope.questions)
    }

    fn post_question<T: DeserializeOwned>(&self, path: &str, query: &str) -> Result<T, ApiError> {
        let response = self
            .http
            .post(self.endpoint(path))
            .json(&json!({ "question": query }))
            .send()?;
        decode(response)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

fn decode<T: DeserializeOwned>(response: reqwest::blocking::Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let message = error_message_from_body(response);
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }
    response.json().map_err(ApiError::Decode)
}

/// Error bodies look like `{"error": "..."}`; anything else is ignored.
fn error_message_from_body(response: reqwest::blocking::Response) -> Option<String> {
    let body: serde_json::Value = response.json().ok()?;
    body.get("error")
        .and_then(|value| value.as_str())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_server_error_string() {
        let err = ApiError::Status {
            status: 422,
            message: Some("Question too vague".into()),
        };
        assert_eq!(err.user_message(), "Question too vague");
    }

    #[test]
    fn user_message_falls_back_when_server_is_silent() {
        let err = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message(), FALLBACK_MESSAGE);
    }

    #[test]
    fn endpoint_join_strips_trailing_slashes() {
        let client =
            ApiClient::new("http://localhost:4000/api///", DEFAULT_TIMEOUT).expect("client");
        assert_eq!(
            client.endpoint("/questions/recent"),
            "http://localhost:4000/api/questions/recent"
        );
    }
}
