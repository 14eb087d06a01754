//! Shared application state.

use std::sync::Arc;

use tracing::{error, warn};

use grounds_inference::{NoteAnalyzer, OpenAIBackend};
use grounds_search::YelpClient;

use crate::config::AppConfig;

/// Application state shared across handlers.
///
/// A `None` service means its credential was missing at startup; the
/// matching endpoints answer `Server misconfigured` instead of failing to boot.
#[derive(Clone, Default)]
pub struct AppState {
    pub analyzer: Option<NoteAnalyzer>,
    pub search: Option<YelpClient>,
}

impl AppState {
    pub fn new(analyzer: Option<NoteAnalyzer>, search: Option<YelpClient>) -> Self {
        Self { analyzer, search }
    }

    /// Build the services from configuration. Credential errors are logged once here.
    pub fn from_config(config: &AppConfig) -> Self {
        let analyzer = match OpenAIBackend::new(config.openai.clone()) {
            Ok(backend) => Some(NoteAnalyzer::new(Arc::new(backend))),
            Err(e) => {
                error!(
                    subsystem = "api",
                    component = "note_analyzer",
                    error = %e,
                    "Note analysis unavailable"
                );
                None
            }
        };

        let search = match YelpClient::new(config.yelp.clone()) {
            Ok(client) => Some(client),
            Err(e) => {
                warn!(
                    subsystem = "api",
                    component = "cafe_search",
                    error = %e,
                    "Cafe search unavailable"
                );
                None
            }
        };

        Self { analyzer, search }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials_leave_services_unset() {
        let state = AppState::from_config(&AppConfig::default());
        assert!(state.analyzer.is_none());
        assert!(state.search.is_none());
    }

    #[test]
    fn test_credentials_enable_services() {
        let mut config = AppConfig::default();
        config.openai.api_key = Some("sk-test".to_string());
        config.yelp.api_key = Some("yelp-test".to_string());

        let state = AppState::from_config(&config);
        assert_eq!(
            state.analyzer.as_ref().map(|a| a.model_name()),
            Some("gpt-4.1-mini")
        );
        assert!(state.search.is_some());
    }
}
