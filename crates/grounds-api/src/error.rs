//! HTTP error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Error body for a request without a usable note.
pub const MISSING_TEXT: &str = "Missing 'text' string in request body";

/// Errors a handler can answer with. Every variant renders `{ "error": ... }`.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed request (400).
    BadRequest(String),
    /// Method not accepted on this route (405).
    MethodNotAllowed,
    /// A required credential was not configured (500).
    Misconfigured,
    /// The language model call failed for a reason other than rate limiting (500).
    ProcessingFailed(String),
    /// A third-party API failed (502).
    Upstream(String),
    NotFound,
}

impl From<grounds_core::Error> for ApiError {
    fn from(err: grounds_core::Error) -> Self {
        match err {
            grounds_core::Error::Config(_) => ApiError::Misconfigured,
            grounds_core::Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            other => ApiError::Upstream(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, serde_json::json!({ "error": msg }))
            }
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                serde_json::json!({ "error": "Only POST allowed" }),
            ),
            ApiError::Misconfigured => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": "Server misconfigured" }),
            ),
            ApiError::ProcessingFailed(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({
                    "error": "AI processing failed",
                    "message": message,
                }),
            ),
            ApiError::Upstream(msg) => (StatusCode::BAD_GATEWAY, serde_json::json!({ "error": msg })),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                serde_json::json!({ "error": "Not found" }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
