//! # grounds-core
//!
//! Core types, traits, and abstractions for local-grounds.
//!
//! This crate provides the canonical note-analysis shape shared by every
//! code path, the deterministic heuristic analyzer used when the language
//! model is unavailable, and the cafe/note records the client persists.

pub mod defaults;
pub mod error;
pub mod heuristic;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use heuristic::fallback_analysis;
pub use models::*;
pub use traits::*;
