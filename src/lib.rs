//! Frame Relay Server
//!
//! A real-time frame-relay service: one producer POSTs encoded video
//! frames over HTTP and the server rebroadcasts each frame to every
//! connected viewer over a WebSocket push channel.
//!
//! # Features
//!
//! - **Last-frame cache**: late joiners are caught up immediately
//! - **Fan-out isolation**: a slow or dead viewer never delays the rest
//! - **Live counters**: connected viewers and total frames on `/` and `/health`
//! - **Embedded viewer**: `/viewer` serves a browser page for the stream
//!
//! # Modules
//!
//! - `hub`: broadcast hub owning the viewer registry and frame cache
//! - `api`: HTTP routes and the WebSocket push channel
//! - `config`: server configuration from the environment
//! - `error`: error taxonomy for the HTTP surface
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use frame_relay::api::http::create_router;
//! use frame_relay::api::websocket::state::AppState;
//! use frame_relay::{BroadcastHub, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig::from_env();
//!     let hub = Arc::new(BroadcastHub::new());
//!     let state = Arc::new(AppState::new(hub));
//!     let app = create_router(state, &config);
//!
//!     let listener = tokio::net::TcpListener::bind(config.bind_addr).await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod hub;

// Re-export commonly used items at crate root
pub use config::ServerConfig;
pub use error::{RelayError, RelayResult};
pub use hub::{BroadcastHub, ConnectionId, FrameReceipt, HubStats};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
