//! Frame Relay Server - Binary Entry Point
//!
//! This is the main entry point for the relay-server binary.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use frame_relay::api::http::create_router;
use frame_relay::api::websocket::state::AppState;
use frame_relay::config::ServerConfig;
use frame_relay::error::RelayResult;
use frame_relay::hub::BroadcastHub;

#[tokio::main]
async fn main() -> RelayResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();
    let hub = Arc::new(BroadcastHub::new());
    let state = Arc::new(AppState::new(hub));
    let app = create_router(state, &config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "frame relay server listening");
    tracing::info!("frame ingest at POST /frame, viewer page at /viewer, push channel at /ws");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
