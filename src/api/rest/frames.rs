//! Frame ingest endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::websocket::state::AppState;
use crate::error::RelayError;

/// One info line per this many ingested frames
const FRAME_LOG_INTERVAL: u64 = 30;

/// Request body for POST /frame
#[derive(Debug, Deserialize)]
pub struct FrameUpload {
    /// Opaque encoded frame payload (base64 image data in practice)
    #[serde(default)]
    pub frame: Option<String>,
}

/// Response body for a successful ingest
#[derive(Debug, Serialize)]
pub struct FrameAck {
    pub success: bool,
    pub message: &'static str,
    pub clients: usize,
    pub frame_number: u64,
}

/// POST /frame - accept one frame from the producer and fan it out
///
/// The body must carry a non-empty `frame` field; a missing body, an
/// unparseable body, or an empty field is rejected with 400 and leaves
/// the hub untouched. Exactly one fan-out push happens per accepted
/// frame - no batching, no coalescing.
pub async fn ingest_frame(
    State(state): State<Arc<AppState>>,
    body: Option<Json<FrameUpload>>,
) -> Result<Json<FrameAck>, RelayError> {
    let frame = body
        .and_then(|Json(upload)| upload.frame)
        .filter(|frame| !frame.is_empty())
        .ok_or(RelayError::MissingPayload)?;

    let receipt = state.hub.publish(frame)?;

    if receipt.sequence % FRAME_LOG_INTERVAL == 0 {
        tracing::info!(
            frame = receipt.sequence,
            clients = receipt.viewers,
            "frame relayed"
        );
    }

    Ok(Json(FrameAck {
        success: true,
        message: "Frame recibido y transmitido",
        clients: receipt.viewers,
        frame_number: receipt.sequence,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_with_frame() {
        let upload: FrameUpload = serde_json::from_str(r#"{"frame":"AAA"}"#).unwrap();
        assert_eq!(upload.frame.as_deref(), Some("AAA"));
    }

    #[test]
    fn test_upload_without_frame_field() {
        let upload: FrameUpload = serde_json::from_str("{}").unwrap();
        assert!(upload.frame.is_none());
    }

    #[test]
    fn test_ack_serialization() {
        let ack = FrameAck {
            success: true,
            message: "Frame recibido y transmitido",
            clients: 3,
            frame_number: 12,
        };

        let json = serde_json::to_string(&ack).unwrap();
        assert!(json.contains(r#""success":true"#));
        assert!(json.contains(r#""clients":3"#));
        assert!(json.contains(r#""frame_number":12"#));
    }
}
