//! `GET /cafes/search`: nearby cafes from the business search API.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, instrument};

use grounds_core::defaults::{DEFAULT_LATITUDE, DEFAULT_LONGITUDE, SEARCH_TERM};
use grounds_core::{filter_cafes, Cafe};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CafeSearchParams {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Search term sent upstream. Defaults to `coffee`.
    pub term: Option<String>,
    /// Filter applied to the results by name or address.
    pub q: Option<String>,
}

impl CafeSearchParams {
    /// Both coordinates, or the default location when either is missing.
    fn location(&self) -> (f64, f64) {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => (DEFAULT_LATITUDE, DEFAULT_LONGITUDE),
        }
    }

    fn term(&self) -> &str {
        self.term
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(SEARCH_TERM)
    }
}

#[derive(Debug, Serialize)]
pub struct CafeSearchResponse {
    pub cafes: Vec<Cafe>,
}

#[instrument(skip(state, params), fields(subsystem = "api", op = "search_cafes"))]
pub async fn search_cafes(
    State(state): State<AppState>,
    params: Result<Query<CafeSearchParams>, QueryRejection>,
) -> Result<Json<CafeSearchResponse>, ApiError> {
    let Some(client) = state.search.as_ref() else {
        error!("Missing YELP_API_KEY secret");
        return Err(ApiError::Misconfigured);
    };

    let Query(params) = params.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let (latitude, longitude) = params.location();

    let cafes = client
        .search_cafes(latitude, longitude, params.term())
        .await
        .map_err(|e| {
            error!(error = %e, "Cafe search failed");
            ApiError::from(e)
        })?;

    let cafes = match params.q.as_deref() {
        Some(q) => filter_cafes(&cafes, q.trim()),
        None => cafes,
    };

    Ok(Json(CafeSearchResponse { cafes }))
}
