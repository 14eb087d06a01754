//! OpenAI-specific error handling.

use grounds_core::Error;

/// OpenAI-specific error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenAIErrorCode {
    /// Invalid authentication credentials.
    AuthenticationError,
    /// Rate limit or quota exceeded.
    RateLimitExceeded,
    /// Model not found or not available.
    ModelNotFound,
    /// Server error.
    ServerError,
    /// Unknown error.
    Unknown,
}

impl OpenAIErrorCode {
    /// Determine error code from HTTP status and error code/type.
    pub fn from_response(status: u16, error_type: &str) -> Self {
        match (status, error_type) {
            (401, _) => Self::AuthenticationError,
            (429, _) | (_, "insufficient_quota") | (_, "rate_limit_exceeded") => {
                Self::RateLimitExceeded
            }
            (404, _) | (_, "model_not_found") => Self::ModelNotFound,
            (500..=599, _) => Self::ServerError,
            _ => Self::Unknown,
        }
    }
}

/// Convert an OpenAI failure into a grounds Error.
///
/// The status code stays in the message so callers that only see text can
/// still recognise a `429`.
pub fn to_grounds_error(code: OpenAIErrorCode, status: u16, message: &str) -> Error {
    match code {
        OpenAIErrorCode::AuthenticationError => {
            Error::Config(format!("Authentication failed ({}): {}", status, message))
        }
        OpenAIErrorCode::RateLimitExceeded => Error::RateLimited(format!(
            "OpenAI returned {}: {}",
            status, message
        )),
        OpenAIErrorCode::ModelNotFound => {
            Error::Config(format!("Model not found ({}): {}", status, message))
        }
        OpenAIErrorCode::ServerError | OpenAIErrorCode::Unknown => {
            Error::Inference(format!("OpenAI returned {}: {}", status, message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_from_401() {
        let code = OpenAIErrorCode::from_response(401, "invalid_api_key");
        assert_eq!(code, OpenAIErrorCode::AuthenticationError);
    }

    #[test]
    fn test_error_code_from_429() {
        let code = OpenAIErrorCode::from_response(429, "rate_limit_exceeded");
        assert_eq!(code, OpenAIErrorCode::RateLimitExceeded);
    }

    #[test]
    fn test_insufficient_quota_is_rate_limit() {
        let code = OpenAIErrorCode::from_response(403, "insufficient_quota");
        assert_eq!(code, OpenAIErrorCode::RateLimitExceeded);
    }

    #[test]
    fn test_error_code_from_404() {
        let code = OpenAIErrorCode::from_response(404, "model_not_found");
        assert_eq!(code, OpenAIErrorCode::ModelNotFound);
    }

    #[test]
    fn test_error_code_from_502() {
        let code = OpenAIErrorCode::from_response(502, "bad_gateway");
        assert_eq!(code, OpenAIErrorCode::ServerError);
    }

    #[test]
    fn test_error_code_from_unknown() {
        let code = OpenAIErrorCode::from_response(418, "im_a_teapot");
        assert_eq!(code, OpenAIErrorCode::Unknown);
    }

    #[test]
    fn test_rate_limit_error_is_recognised() {
        let err = to_grounds_error(OpenAIErrorCode::RateLimitExceeded, 429, "Too many requests");
        assert!(err.is_rate_limited());
        assert!(err.to_string().contains("429"));
    }

    #[test]
    fn test_server_error_is_not_rate_limit() {
        let err = to_grounds_error(OpenAIErrorCode::ServerError, 503, "overloaded");
        assert!(!err.is_rate_limited());
        assert!(err.to_string().contains("overloaded"));
    }

    #[test]
    fn test_auth_error_maps_to_config() {
        let err = to_grounds_error(OpenAIErrorCode::AuthenticationError, 401, "bad key");
        assert!(matches!(err, Error::Config(_)));
    }
}
