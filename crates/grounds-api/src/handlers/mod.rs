//! HTTP handlers.

pub mod analyze;
pub mod health;
pub mod search;

pub use analyze::{analyze_cafe_note, method_not_allowed, preflight};
pub use health::{health_check, not_found};
pub use search::{search_cafes, CafeSearchParams, CafeSearchResponse};
