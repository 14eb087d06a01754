//! Centralized default constants for local-grounds.
//!
//! All crates reference these constants instead of defining their own
//! magic numbers. Organized by domain area.

// =============================================================================
// NOTE ANALYSIS
// =============================================================================

/// Generation model used for note analysis.
pub const ANALYSIS_MODEL: &str = "gpt-4.1-mini";

/// Output token budget for one analysis call.
pub const ANALYSIS_MAX_OUTPUT_TOKENS: u32 = 256;

/// Longest summary the heuristic analyzer emits, in characters.
pub const SUMMARY_MAX_CHARS: usize = 140;

/// Characters kept from the note before the ellipsis when truncating.
pub const SUMMARY_TRUNCATED_CHARS: usize = 137;

/// Suffix appended to truncated summaries.
pub const SUMMARY_ELLIPSIS: &str = "...";

// =============================================================================
// PROVIDER
// =============================================================================

/// OpenAI API endpoint.
pub const OPENAI_URL: &str = "https://api.openai.com/v1";

/// Request timeout for provider calls in seconds.
pub const PROVIDER_TIMEOUT_SECS: u64 = 300;

// =============================================================================
// CAFE SEARCH
// =============================================================================

/// Yelp Fusion API endpoint.
pub const YELP_URL: &str = "https://api.yelp.com/v3";

/// Search term used when the caller gives none.
pub const SEARCH_TERM: &str = "coffee";

/// Number of businesses requested per search.
pub const SEARCH_LIMIT: u32 = 30;

/// Fallback search latitude (Tempe, AZ) when no location is known.
pub const DEFAULT_LATITUDE: f64 = 33.4255;

/// Fallback search longitude (Tempe, AZ) when no location is known.
pub const DEFAULT_LONGITUDE: f64 = -111.94;

/// Address shown for businesses the search API returns without a street line.
pub const UNKNOWN_ADDRESS: &str = "ADDRESS UNKNOWN";

// =============================================================================
// SERVER
// =============================================================================

/// Bind host for the HTTP server.
pub const SERVER_HOST: &str = "0.0.0.0";

/// Bind port for the HTTP server.
pub const SERVER_PORT: u16 = 3000;

/// Largest accepted request body in bytes. Notes are short free text.
pub const MAX_BODY_BYTES: usize = 64 * 1024;
