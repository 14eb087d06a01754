//! Error types for local-grounds.

use thiserror::Error;

/// Result type alias using local-grounds' Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for local-grounds operations.
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// Configuration error (missing credential, bad setting)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Inference/generation failed
    #[error("Inference error: {0}")]
    Inference(String),

    /// Provider quota or rate limit exhausted
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Cafe search failed
    #[error("Search error: {0}")]
    Search(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// HTTP/network request failed
    #[error("Request error: {0}")]
    Request(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Whether this error means the provider refused the call for quota reasons.
    ///
    /// Providers that only report the status in free text are still caught by
    /// the `429` marker in the rendered message.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Error::RateLimited(_)) || self.to_string().contains("429")
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config() {
        let err = Error::Config("missing API key".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing API key");
    }

    #[test]
    fn test_error_display_inference() {
        let err = Error::Inference("model timeout".to_string());
        assert_eq!(err.to_string(), "Inference error: model timeout");
    }

    #[test]
    fn test_error_display_rate_limited() {
        let err = Error::RateLimited("quota exceeded".to_string());
        assert_eq!(err.to_string(), "Rate limited: quota exceeded");
    }

    #[test]
    fn test_error_display_search() {
        let err = Error::Search("upstream 500".to_string());
        assert_eq!(err.to_string(), "Search error: upstream 500");
    }

    #[test]
    fn test_rate_limited_variant_is_rate_limited() {
        assert!(Error::RateLimited("slow down".to_string()).is_rate_limited());
    }

    #[test]
    fn test_429_in_message_is_rate_limited() {
        let err = Error::Inference("OpenAI returned 429 Too Many Requests".to_string());
        assert!(err.is_rate_limited());

        let err = Error::Request("HTTP status client error (429 Too Many Requests)".to_string());
        assert!(err.is_rate_limited());
    }

    #[test]
    fn test_other_errors_are_not_rate_limited() {
        assert!(!Error::Inference("OpenAI returned 500".to_string()).is_rate_limited());
        assert!(!Error::Request("connection refused".to_string()).is_rate_limited());
        assert!(!Error::Config("missing key".to_string()).is_rate_limited());
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<i32>("not a number").unwrap_err();
        let err: Error = json_err.into();
        match err {
            Error::Serialization(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected Serialization error"),
        }
    }

    #[test]
    fn test_error_clone_keeps_variant_and_message() {
        let err = Error::RateLimited("quota".to_string());
        let copy = err.clone();
        assert!(matches!(copy, Error::RateLimited(ref m) if m == "quota"));
        assert_eq!(copy.to_string(), err.to_string());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }
}
