//! # grounds-inference
//!
//! Language-model note analysis for local-grounds.
//!
//! This crate provides:
//! - OpenAI Responses API backend (feature `openai`, default)
//! - The fixed analysis prompt
//! - Repair and coercion of model output into the canonical shape
//! - [`NoteAnalyzer`], which falls back to the heuristic analyzer when the
//!   model output is unusable or the provider is rate limited
//! - A deterministic mock backend (feature `mock`)
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use grounds_inference::{NoteAnalyzer, OpenAIBackend, OpenAIConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = OpenAIConfig {
//!         api_key: Some("sk-...".to_string()),
//!         ..Default::default()
//!     };
//!     let analyzer = NoteAnalyzer::new(Arc::new(OpenAIBackend::new(config).unwrap()));
//!     let analysis = analyzer.analyze("Quiet, great cold brew").await.unwrap();
//!     println!("{} {:?}", analysis.sentiment, analysis.tags);
//! }
//! ```

pub mod analyzer;
pub mod prompt;
pub mod response;

#[cfg(feature = "openai")]
pub mod openai;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export core types
pub use grounds_core::*;

#[cfg(feature = "openai")]
pub use openai::{OpenAIBackend, OpenAIConfig};

pub use analyzer::{AnalysisOutcome, AnalysisSource, NoteAnalyzer};
pub use prompt::build_analysis_prompt;
pub use response::{coerce_analysis, extract_json_object, parse_model_output};
