//! Mock generation backend for deterministic testing.
//!
//! ## Usage
//!
//! ```rust
//! use grounds_inference::mock::MockGenerationBackend;
//! use grounds_core::Error;
//!
//! let ok = MockGenerationBackend::new().with_fixed_response(r#"{"summary":"ok"}"#);
//! let limited = MockGenerationBackend::new()
//!     .with_failure(Error::RateLimited("quota".to_string()));
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use grounds_core::{Error, GenerationBackend, Result};

/// Mock generation backend for testing.
#[derive(Clone)]
pub struct MockGenerationBackend {
    config: Arc<MockConfig>,
    call_log: Arc<Mutex<Vec<MockCall>>>,
}

#[derive(Debug, Clone)]
struct MockConfig {
    model: String,
    fixed_responses: HashMap<String, String>,
    default_response: String,
    /// Replayed on every call.
    failure: Option<Error>,
}

/// One recorded `generate` call.
#[derive(Debug, Clone)]
pub struct MockCall {
    pub prompt: String,
    pub timestamp: std::time::Instant,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            model: "mock-model".to_string(),
            fixed_responses: HashMap::new(),
            default_response: "Mock response".to_string(),
            failure: None,
        }
    }
}

impl MockGenerationBackend {
    /// Create a new mock backend with default configuration.
    pub fn new() -> Self {
        Self {
            config: Arc::new(MockConfig::default()),
            call_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set the reported model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.config).model = model.into();
        self
    }

    /// Set a fixed response for generation requests.
    pub fn with_fixed_response(mut self, response: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.config).default_response = response.into();
        self
    }

    /// Add a response mapping for a specific prompt.
    pub fn with_response_mapping(
        mut self,
        prompt: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Arc::make_mut(&mut self.config)
            .fixed_responses
            .insert(prompt.into(), output.into());
        self
    }

    /// Fail every call with this error.
    pub fn with_failure(mut self, error: Error) -> Self {
        Arc::make_mut(&mut self.config).failure = Some(error);
        self
    }

    /// Get all logged calls for assertion.
    pub fn get_calls(&self) -> Vec<MockCall> {
        self.call_log.lock().map(|log| log.clone()).unwrap_or_default()
    }

    /// Number of generation calls so far.
    pub fn generate_call_count(&self) -> usize {
        self.call_log.lock().map(|log| log.len()).unwrap_or_default()
    }

    fn log_call(&self, prompt: &str) {
        if let Ok(mut log) = self.call_log.lock() {
            log.push(MockCall {
                prompt: prompt.to_string(),
                timestamp: std::time::Instant::now(),
            });
        }
    }
}

impl Default for MockGenerationBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationBackend for MockGenerationBackend {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.log_call(prompt);

        if let Some(failure) = &self.config.failure {
            return Err(failure.clone());
        }

        if let Some(response) = self.config.fixed_responses.get(prompt) {
            return Ok(response.clone());
        }

        Ok(self.config.default_response.clone())
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_backend_generate() {
        let backend = MockGenerationBackend::new().with_fixed_response("Custom response");
        let response = backend.generate("test prompt").await.unwrap();
        assert_eq!(response, "Custom response");
    }

    #[tokio::test]
    async fn test_mock_backend_response_mapping() {
        let backend = MockGenerationBackend::new()
            .with_response_mapping("hello", "world")
            .with_response_mapping("foo", "bar");

        assert_eq!(backend.generate("hello").await.unwrap(), "world");
        assert_eq!(backend.generate("foo").await.unwrap(), "bar");
        assert_eq!(backend.generate("other").await.unwrap(), "Mock response");
    }

    #[tokio::test]
    async fn test_mock_backend_failure_is_replayed() {
        let backend =
            MockGenerationBackend::new().with_failure(Error::RateLimited("quota".to_string()));

        for _ in 0..2 {
            let err = backend.generate("x").await.unwrap_err();
            assert!(matches!(err, Error::RateLimited(ref m) if m == "quota"));
        }
        assert_eq!(backend.generate_call_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_backend_failure_keeps_variant() {
        let backend = MockGenerationBackend::new()
            .with_failure(Error::Inference("OpenAI returned 500: boom".to_string()));

        let err = backend.generate("x").await.unwrap_err();
        assert!(matches!(err, Error::Inference(ref m) if m.ends_with("boom")));
        assert!(!err.is_rate_limited());
    }

    #[tokio::test]
    async fn test_mock_backend_call_logging_shared_across_clones() {
        let backend = MockGenerationBackend::new();
        let clone = backend.clone();

        clone.generate("prompt").await.unwrap();

        let calls = backend.get_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].prompt, "prompt");
    }

    #[test]
    fn test_mock_model_name() {
        let backend = MockGenerationBackend::new().with_model("test-gen");
        assert_eq!(backend.model_name(), "test-gen");
    }
}
