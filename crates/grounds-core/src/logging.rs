//! Structured logging schema and field name constants for local-grounds.
//!
//! Every `tracing` event and span across the workspace uses these field
//! names, so log queries work the same for the API, the analyzer and the
//! search client. `tracing` macros take field names as identifiers, so call
//! sites spell them literally; this module is the vocabulary they must match.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Degraded service, requires operator attention (missing credential, provider failure) |
//! | WARN  | Recoverable issue, automatic fallback applied |
//! | INFO  | Lifecycle events (startup, shutdown), operation completions |
//! | DEBUG | Decision points, intermediate values, config choices |
//! | TRACE | High-volume data |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "api", "inference", "search"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "openai", "note_analyzer", "yelp", "cafe_search"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "generate", "analyze_note", "search_cafes", "analyze_cafe_note"
pub const OPERATION: &str = "op";

// ─── Inference fields ──────────────────────────────────────────────────────

/// Model name used for inference.
pub const MODEL: &str = "model";

/// Byte length of a prompt.
pub const PROMPT_LEN: &str = "prompt_len";

/// Byte length of a model response.
pub const RESPONSE_LEN: &str = "response_len";

/// Why the heuristic analyzer answered instead of the model.
/// Values: "rate_limited", "unparseable_output"
pub const FALLBACK_REASON: &str = "fallback_reason";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Error message when an operation fails.
pub const ERROR: &str = "error";
