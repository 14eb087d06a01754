//! Server configuration, read once from the environment at startup.

use grounds_core::defaults::{MAX_BODY_BYTES, SERVER_HOST, SERVER_PORT};
use grounds_inference::OpenAIConfig;
use grounds_search::YelpConfig;

/// Everything the server needs, resolved before the router is built.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Largest accepted request body in bytes.
    pub max_body_bytes: usize,
    pub openai: OpenAIConfig,
    pub yelp: YelpConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: SERVER_HOST.to_string(),
            port: SERVER_PORT,
            max_body_bytes: MAX_BODY_BYTES,
            openai: OpenAIConfig::default(),
            yelp: YelpConfig::default(),
        }
    }
}

impl AppConfig {
    /// Read configuration from environment variables.
    ///
    /// Server settings are `HOST` (default `0.0.0.0`), `PORT` (default `3000`)
    /// and `MAX_BODY_BYTES` (default 64 KiB). Provider settings are read by
    /// [`OpenAIConfig::from_env`] and [`YelpConfig::from_env`].
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| SERVER_HOST.to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(SERVER_PORT),
            max_body_bytes: std::env::var("MAX_BODY_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(MAX_BODY_BYTES),
            openai: OpenAIConfig::from_env(),
            yelp: YelpConfig::from_env(),
        }
    }

    /// `host:port` string for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
