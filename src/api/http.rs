//! HTTP server setup with Axum

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use super::rest::{frames, status, viewer};
use super::websocket::{handler::ws_handler, state::AppState};
use crate::config::ServerConfig;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    // CORS configuration - the relay is meant to be reachable from anywhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // WebSocket endpoint
        .route("/ws", get(ws_handler))
        // Producer ingest
        .route("/frame", post(frames::ingest_frame))
        // Status endpoints
        .route("/health", get(status::health_check))
        .route("/", get(status::service_info))
        // Embedded browser viewer
        .route("/viewer", get(viewer::viewer_page))
        .layer(DefaultBodyLimit::max(config.max_frame_bytes))
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hub::BroadcastHub;
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    fn test_router() -> Router {
        let hub = Arc::new(BroadcastHub::new());
        let state = Arc::new(AppState::new(hub));
        create_router(state, &ServerConfig::default())
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = test_router();

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn test_service_info() {
        let app = test_router();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn test_viewer_page_served() {
        let app = test_router();

        let response = app
            .oneshot(Request::builder().uri("/viewer").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
    }
}
