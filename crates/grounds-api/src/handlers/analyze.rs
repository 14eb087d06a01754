//! `POST /analyzeCafeNote`: note analysis with heuristic fallback.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::{error, instrument};

use grounds_core::{AnalyzeNoteRequest, NoteAnalysis};

use crate::error::{ApiError, MISSING_TEXT};
use crate::state::AppState;

/// Analyze a note.
///
/// Checks run in order: credential, then body, then the provider call.
/// Rate limiting and unreadable model output both still answer 200 with the
/// heuristic result.
#[instrument(skip(state, body), fields(subsystem = "api", op = "analyze_cafe_note", body_len = body.len()))]
pub async fn analyze_cafe_note(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<NoteAnalysis>, ApiError> {
    let Some(analyzer) = state.analyzer.as_ref() else {
        error!("Missing OPENAI_API_KEY secret");
        return Err(ApiError::Misconfigured);
    };

    let text = note_text(&body).ok_or_else(|| ApiError::BadRequest(MISSING_TEXT.to_string()))?;

    match analyzer.analyze(&text).await {
        Ok(analysis) => Ok(Json(analysis)),
        Err(e) => {
            error!(error = %e, "Note analysis failed");
            Err(ApiError::ProcessingFailed(e.to_string()))
        }
    }
}

/// CORS pre-flight. Headers are added by the router.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// The non-empty `text` string of a JSON object body, if there is one.
fn note_text(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<AnalyzeNoteRequest>(body)
        .ok()
        .map(|req| req.text)
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_text_accepts_string() {
        assert_eq!(
            note_text(br#"{"text":"Quiet and cozy","extra":1}"#).as_deref(),
            Some("Quiet and cozy")
        );
    }

    #[test]
    fn test_note_text_rejects_missing_wrong_type_and_empty() {
        assert_eq!(note_text(b"{}"), None);
        assert_eq!(note_text(br#"{"text":42}"#), None);
        assert_eq!(note_text(br#"{"text":null}"#), None);
        assert_eq!(note_text(br#"{"text":""}"#), None);
        assert_eq!(note_text(b"not json"), None);
        assert_eq!(note_text(b""), None);
    }

    #[test]
    fn test_note_text_keeps_whitespace_only_note() {
        assert_eq!(note_text(br#"{"text":"  "}"#).as_deref(), Some("  "));
    }
}
