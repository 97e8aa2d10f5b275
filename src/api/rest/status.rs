//! Health check and service descriptor endpoints

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::websocket::state::AppState;

/// Response for GET /health
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub clients: usize,
    pub total_frames: u64,
    pub message: &'static str,
}

/// GET /health - liveness probe with live counters
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let stats = state.hub.stats();

    Json(HealthResponse {
        status: "OK",
        timestamp: chrono::Utc::now().to_rfc3339(),
        clients: stats.connected_viewers,
        total_frames: stats.frames_total,
        message: "Servidor de streaming funcionando",
    })
}

/// Response for GET /
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub endpoints: EndpointMap,
    pub stats: LiveStats,
}

/// Endpoint map advertised by the service descriptor
#[derive(Debug, Serialize)]
pub struct EndpointMap {
    pub health: &'static str,
    pub frame_upload: &'static str,
    pub viewer: &'static str,
    pub websocket: &'static str,
}

/// Live counters advertised by the service descriptor
#[derive(Debug, Serialize)]
pub struct LiveStats {
    pub connected_clients: usize,
    pub total_frames_received: u64,
    pub has_current_frame: bool,
}

/// GET / - service descriptor with endpoint map and live stats
pub async fn service_info(State(state): State<Arc<AppState>>) -> Json<ServiceInfo> {
    let stats = state.hub.stats();

    Json(ServiceInfo {
        name: crate::NAME,
        version: crate::VERSION,
        status: "running",
        endpoints: EndpointMap {
            health: "/health",
            frame_upload: "/frame (POST)",
            viewer: "/viewer",
            websocket: "/ws",
        },
        stats: LiveStats {
            connected_clients: stats.connected_viewers,
            total_frames_received: stats.frames_total,
            has_current_frame: stats.has_current_frame,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_shape() {
        let health = HealthResponse {
            status: "OK",
            timestamp: "2026-01-01T00:00:00+00:00".to_string(),
            clients: 2,
            total_frames: 5,
            message: "Servidor de streaming funcionando",
        };

        let json = serde_json::to_string(&health).unwrap();
        assert!(json.contains(r#""status":"OK""#));
        assert!(json.contains(r#""clients":2"#));
        assert!(json.contains(r#""total_frames":5"#));
    }

    #[test]
    fn test_service_info_shape() {
        let info = ServiceInfo {
            name: "frame-relay",
            version: "1.0.0",
            status: "running",
            endpoints: EndpointMap {
                health: "/health",
                frame_upload: "/frame (POST)",
                viewer: "/viewer",
                websocket: "/ws",
            },
            stats: LiveStats {
                connected_clients: 0,
                total_frames_received: 0,
                has_current_frame: false,
            },
        };

        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains(r#""total_frames_received":0"#));
        assert!(json.contains(r#""has_current_frame":false"#));
        assert!(json.contains(r#""websocket":"/ws""#));
    }
}
