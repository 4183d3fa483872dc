//! HTTP endpoints for the honeypot.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::orchestrator::Honeypot;
use crate::session::SessionMemory;

/// Header carrying the shared secret.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Shared state for the honeypot routes.
#[derive(Clone)]
pub struct ApiState {
    pub honeypot: Arc<Honeypot>,
    pub api_key: SecretString,
}

/// Inbound request body for `POST /analyze`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub session_id: String,
    pub message: InboundMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundMessage {
    pub sender: String,
    pub text: String,
}

/// Response body for `POST /analyze`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub status: &'static str,
    pub scam_detected: bool,
    pub reply: Option<String>,
    pub session_memory: SessionMemory,
}

/// Build the honeypot router.
pub fn honeypot_routes(state: ApiState) -> Router {
    Router::new()
        .route("/analyze", post(analyze))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "scam-honeypot"
    }))
}

/// Exact match against the configured secret. The presented value is never logged.
fn authorize(headers: &HeaderMap, expected: &SecretString) -> Result<(), ApiError> {
    let presented = headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            warn!("Rejected request without API key");
            ApiError::Unauthorized
        })?;

    if presented != expected.expose_secret() {
        warn!("Rejected request with invalid API key");
        return Err(ApiError::Unauthorized);
    }
    Ok(())
}

/// POST /analyze
///
/// Authenticates before looking at the body, so a bad credential is always
/// 401 no matter what was sent.
async fn analyze(
    State(state): State<ApiState>,
    headers: HeaderMap,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    authorize(&headers, &state.api_key)?;

    let Json(request) = body.map_err(|rejection| {
        debug!(error = %rejection.body_text(), "Malformed analyze request");
        ApiError::MalformedInput(rejection.body_text())
    })?;

    let snapshot = state
        .honeypot
        .handle_inbound_message(
            &request.session_id,
            &request.message.sender,
            &request.message.text,
        )
        .await;

    Ok(Json(AnalyzeResponse {
        status: "success",
        scam_detected: snapshot.scam_detected,
        reply: snapshot.reply,
        session_memory: snapshot.session,
    }))
}
