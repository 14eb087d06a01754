//! Yelp Fusion business search client.

use std::time::{Duration, Instant};

use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use grounds_core::defaults::{PROVIDER_TIMEOUT_SECS, SEARCH_LIMIT, YELP_URL};
use grounds_core::{Cafe, Error, Result};

use crate::types::YelpSearchResponse;

/// Configuration for the Yelp client.
#[derive(Clone)]
pub struct YelpConfig {
    /// Base URL for the API endpoint.
    pub base_url: String,
    /// API key. Required; construction fails without it.
    pub api_key: Option<String>,
    /// Businesses requested per search.
    pub limit: u32,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for YelpConfig {
    fn default() -> Self {
        Self {
            base_url: YELP_URL.to_string(),
            api_key: None,
            limit: SEARCH_LIMIT,
            timeout_seconds: PROVIDER_TIMEOUT_SECS,
        }
    }
}

impl std::fmt::Debug for YelpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YelpConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("limit", &self.limit)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl YelpConfig {
    /// Read configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `YELP_API_KEY` | (none) |
    /// | `YELP_BASE_URL` | `https://api.yelp.com/v3` |
    /// | `YELP_SEARCH_LIMIT` | `30` |
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("YELP_BASE_URL").unwrap_or_else(|_| YELP_URL.to_string()),
            api_key: std::env::var("YELP_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            limit: std::env::var("YELP_SEARCH_LIMIT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(SEARCH_LIMIT),
            timeout_seconds: PROVIDER_TIMEOUT_SECS,
        }
    }
}

/// Client for the Yelp business search endpoint.
#[derive(Clone)]
pub struct YelpClient {
    client: Client,
    config: YelpConfig,
    api_key: String,
}

impl YelpClient {
    /// Create a new client. Fails with [`Error::Config`] when no API key is configured.
    pub fn new(config: YelpConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| Error::Config("Missing YELP_API_KEY secret".to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Search(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            "Initializing Yelp client: url={}, limit={}",
            config.base_url, config.limit
        );

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(YelpConfig::from_env())
    }

    pub fn config(&self) -> &YelpConfig {
        &self.config
    }

    /// Search for businesses matching `term` around a point.
    #[instrument(skip(self), fields(subsystem = "search", component = "yelp", op = "search_cafes"))]
    pub async fn search_cafes(&self, latitude: f64, longitude: f64, term: &str) -> Result<Vec<Cafe>> {
        let start = Instant::now();
        let url = format!(
            "{}/businesses/search",
            self.config.base_url.trim_end_matches('/')
        );

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("term", term.to_string()),
                ("limit", self.config.limit.to_string()),
            ])
            .send()
            .await
            .map_err(|e| Error::Request(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body = if body.is_empty() { "no body".to_string() } else { body };
            warn!(status = status.as_u16(), "Yelp search failed");
            return Err(Error::Search(format!(
                "Yelp returned {}: {}",
                status.as_u16(),
                body
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Request(format!("Failed to read response: {}", e)))?;
        let decoded: YelpSearchResponse = serde_json::from_slice(&bytes)?;

        let cafes: Vec<Cafe> = decoded
            .businesses
            .into_iter()
            .map(|b| b.into_cafe())
            .collect();

        debug!(
            result_count = cafes.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Cafe search complete"
        );
        Ok(cafes)
    }
}
