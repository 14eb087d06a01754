//! OpenAI inference backend.
//!
//! Talks to the Responses API (`POST /responses`) of OpenAI or any endpoint
//! that mirrors it.
//!
//! # Example
//!
//! ```rust,no_run
//! use grounds_inference::openai::{OpenAIBackend, OpenAIConfig};
//! use grounds_core::GenerationBackend;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = OpenAIConfig {
//!         api_key: Some("sk-...".to_string()),
//!         ..Default::default()
//!     };
//!     let backend = OpenAIBackend::new(config).unwrap();
//!     let text = backend.generate("Say hello").await.unwrap();
//!     println!("{}", text);
//! }
//! ```

mod backend;
mod error;
mod types;

pub use backend::{OpenAIBackend, OpenAIConfig};
pub use error::{to_grounds_error, OpenAIErrorCode};
pub use types::*;
