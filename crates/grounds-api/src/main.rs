//! grounds-api - HTTP API server for local-grounds

use std::net::SocketAddr;

use tracing::info;

use grounds_api::telemetry::{init_tracing, LogSettings};
use grounds_api::{build_router, AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let log_settings = LogSettings::from_env();
    let _file_guard = init_tracing(&log_settings);
    info!(
        json = log_settings.json,
        log_file = %log_settings.destination(),
        "Logging initialized"
    );

    let config = AppConfig::from_env();
    let state = AppState::from_config(&config);
    let app = build_router(state, config.max_body_bytes);

    let addr: SocketAddr = config.bind_addr().parse()?;
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
