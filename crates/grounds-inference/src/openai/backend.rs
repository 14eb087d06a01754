//! OpenAI Responses API backend implementation.

use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

use grounds_core::defaults::{
    ANALYSIS_MAX_OUTPUT_TOKENS, ANALYSIS_MODEL, OPENAI_URL, PROVIDER_TIMEOUT_SECS,
};
use grounds_core::{Error, GenerationBackend, Result};

use super::error::{to_grounds_error, OpenAIErrorCode};
use super::types::*;

/// Configuration for the OpenAI backend.
#[derive(Clone)]
pub struct OpenAIConfig {
    /// Base URL for the API endpoint.
    pub base_url: String,
    /// API key. Required; construction fails without it.
    pub api_key: Option<String>,
    /// Model to use for generation.
    pub gen_model: String,
    /// Output token budget per call.
    pub max_output_tokens: u32,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            base_url: OPENAI_URL.to_string(),
            api_key: None,
            gen_model: ANALYSIS_MODEL.to_string(),
            max_output_tokens: ANALYSIS_MAX_OUTPUT_TOKENS,
            timeout_seconds: PROVIDER_TIMEOUT_SECS,
        }
    }
}

impl std::fmt::Debug for OpenAIConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAIConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("gen_model", &self.gen_model)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl OpenAIConfig {
    /// Read configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `OPENAI_API_KEY` | (none) |
    /// | `OPENAI_BASE_URL` | `https://api.openai.com/v1` |
    /// | `OPENAI_GEN_MODEL` | `gpt-4.1-mini` |
    /// | `OPENAI_MAX_OUTPUT_TOKENS` | `256` |
    /// | `OPENAI_TIMEOUT` | `300` |
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| OPENAI_URL.to_string()),
            api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            gen_model: std::env::var("OPENAI_GEN_MODEL")
                .unwrap_or_else(|_| ANALYSIS_MODEL.to_string()),
            max_output_tokens: std::env::var("OPENAI_MAX_OUTPUT_TOKENS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(ANALYSIS_MAX_OUTPUT_TOKENS),
            timeout_seconds: std::env::var("OPENAI_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(PROVIDER_TIMEOUT_SECS),
        }
    }
}

/// OpenAI Responses API backend.
pub struct OpenAIBackend {
    client: Client,
    config: OpenAIConfig,
    api_key: String,
}

impl OpenAIBackend {
    /// Create a new OpenAI backend with the given configuration.
    ///
    /// Fails with [`Error::Config`] when no API key is configured.
    pub fn new(config: OpenAIConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| Error::Config("Missing OPENAI_API_KEY secret".to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Inference(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            "Initializing OpenAI backend: url={}, gen={}, max_output_tokens={}",
            config.base_url, config.gen_model, config.max_output_tokens
        );

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(OpenAIConfig::from_env())
    }

    /// Get the current configuration.
    pub fn config(&self) -> &OpenAIConfig {
        &self.config
    }

    /// Build an authenticated POST request.
    fn build_request(&self, endpoint: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), endpoint);
        self.client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
    }
}

#[async_trait]
impl GenerationBackend for OpenAIBackend {
    #[instrument(skip(self, prompt), fields(
        subsystem = "inference",
        component = "openai",
        op = "generate",
        model = %self.config.gen_model,
        prompt_len = prompt.len(),
    ))]
    async fn generate(&self, prompt: &str) -> Result<String> {
        let start = Instant::now();

        let request = ResponsesRequest {
            model: self.config.gen_model.clone(),
            input: prompt.to_string(),
            max_output_tokens: Some(self.config.max_output_tokens),
        };

        let response = self
            .build_request("/responses")
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Request(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let (message, error_type) = match serde_json::from_str::<OpenAIErrorResponse>(&body) {
                Ok(parsed) => {
                    let kind = parsed.error.code.or(parsed.error.error_type);
                    (parsed.error.message, kind.unwrap_or_default())
                }
                Err(_) if body.is_empty() => ("Unknown error".to_string(), String::new()),
                Err(_) => (body, String::new()),
            };
            let code = OpenAIErrorCode::from_response(status.as_u16(), &error_type);
            return Err(to_grounds_error(code, status.as_u16(), &message));
        }

        let result: ResponsesResponse = response
            .json()
            .await
            .map_err(|e| Error::Inference(format!("Failed to parse response: {}", e)))?;

        let content = result
            .first_text()
            .ok_or_else(|| Error::Inference("Response contained no text output".to_string()))?
            .to_string();

        let elapsed = start.elapsed().as_millis() as u64;
        debug!(
            response_len = content.len(),
            duration_ms = elapsed,
            "Generation complete"
        );
        if elapsed > 30000 {
            warn!(duration_ms = elapsed, slow = true, "Slow generation operation");
        }
        Ok(content)
    }

    fn model_name(&self) -> &str {
        &self.config.gen_model
    }
}
