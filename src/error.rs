//! Error types for the honeypot.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::replies::ReplyCategory;

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors surfaced at the HTTP boundary.
///
/// Every variant is terminal for the request; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid API Key")]
    Unauthorized,

    #[error("Malformed request: {0}")]
    MalformedInput(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::MalformedInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(serde_json::json!({
            "status": "error",
            "error": self.to_string(),
        }));
        (status, body).into_response()
    }
}

/// Session store errors.
///
/// Never surfaced to callers: the orchestrator degrades to no reply.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Reply bank for category {category} is empty")]
    EmptyReplyBank { category: ReplyCategory },
}
