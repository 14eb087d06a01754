//! Tracing subscriber setup for the server binary.
//!
//! Environment variables:
//!   LOG_FORMAT  - "json" or "text" (default: "text")
//!   LOG_FILE    - path to log file (optional, daily rotation)
//!   LOG_ANSI    - "true"/"false" override ANSI colors (off for files, on for the console)
//!   RUST_LOG    - standard env filter

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str =
    "grounds_api=debug,grounds_inference=debug,grounds_search=debug,tower_http=debug";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub json: bool,
    pub file: Option<PathBuf>,
    pub ansi: bool,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self::parse(
            std::env::var("LOG_FORMAT").ok().as_deref(),
            std::env::var("LOG_FILE").ok().as_deref(),
            std::env::var("LOG_ANSI").ok().as_deref(),
        )
    }

    pub fn parse(format: Option<&str>, file: Option<&str>, ansi: Option<&str>) -> Self {
        let file = file.filter(|f| !f.trim().is_empty()).map(PathBuf::from);
        let ansi = match ansi {
            Some(v) => v == "true" || v == "1",
            None => file.is_none(),
        };
        Self {
            json: format == Some("json"),
            file,
            ansi,
        }
    }

    /// Human-readable destination for the startup log line.
    pub fn destination(&self) -> String {
        self.file
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(stdout)".to_string())
    }
}

/// Install the global subscriber. Keep the returned guard alive for the
/// lifetime of the process or buffered file output is lost.
pub fn init_tracing(settings: &LogSettings) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    let (writer, guard) = match settings.file.as_deref() {
        Some(path) => {
            let dir = path.parent().unwrap_or(Path::new("."));
            let name = path
                .file_name()
                .and_then(|f| f.to_str())
                .unwrap_or("grounds-api.log");
            let (non_blocking, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, name));
            (BoxMakeWriter::new(non_blocking), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stdout), None),
    };

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(settings.ansi);
    let registry = tracing_subscriber::registry().with(env_filter);

    if settings.json {
        registry.with(layer.json()).init();
    } else {
        registry.with(layer).init();
    }

    guard
}
