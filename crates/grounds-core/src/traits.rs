//! Core traits for local-grounds.

use async_trait::async_trait;

use crate::error::Result;

// =============================================================================
// INFERENCE TRAITS
// =============================================================================

/// Backend for text generation using a language model.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Generate text given a prompt.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Get the model name being used.
    fn model_name(&self) -> &str;
}
