use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use station_server::config::ServerConfig;
use station_server::schedule::SharedSchedule;
use station_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Log level from RUST_LOG, defaulting to info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let config = ServerConfig::from_env().context("invalid server configuration")?;

    // One store for the lifetime of the process, starting empty
    let state = AppState::new(SharedSchedule::new());
    let app = create_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("Station arrivals server listening on http://{addr}");
    info!("API Endpoints:");
    info!("  GET  /health                    - Health check");
    info!("  POST /schedule-new-line         - Register a line's arrival times");
    info!("  GET  /next-simultaneous-arrival - Next minute with 2+ arrivals");
    info!("  GET  /lines                     - List known lines");
    info!("  GET  /lines/:name               - Show one line's schedule");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
