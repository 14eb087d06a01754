use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::state::AppState;

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let configured = |on: bool| if on { "configured" } else { "misconfigured" };

    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "analysis": configured(state.analyzer.is_some()),
        "search": configured(state.search.is_some()),
    }))
}

pub async fn not_found() -> crate::error::ApiError {
    crate::error::ApiError::NotFound
}
