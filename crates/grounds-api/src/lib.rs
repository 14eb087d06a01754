//! grounds-api - HTTP API server for local-grounds
//!
//! Serves note analysis at `POST /analyzeCafeNote`, a nearby cafe search
//! proxy at `GET /cafes/search` and `GET /health`. The binary in `main.rs`
//! only wires configuration, logging and the listener around [`build_router`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod telemetry;

pub use config::AppConfig;
pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
