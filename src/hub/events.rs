//! Wire-level message types for the viewer push channel

use serde::{Deserialize, Serialize};

/// Events pushed to connected viewers
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RelayEvent {
    /// A producer frame being fanned out (or replayed to a late joiner)
    #[serde(rename = "video-frame")]
    VideoFrame { frame: String },
}

/// Push message wrapper with delivery metadata
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PushMessage {
    /// The relay event
    #[serde(flatten)]
    pub event: RelayEvent,

    /// Monotonically increasing sequence ID for gap detection
    pub sequence_id: u64,

    /// Unix timestamp when the frame was ingested
    pub timestamp: i64,
}

/// Client message types
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Ping for heartbeat
    Ping,
}

/// Welcome message sent on connection
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WelcomeMessage {
    #[serde(rename = "type")]
    pub msg_type: String,
    pub current_sequence_id: u64,
}

impl WelcomeMessage {
    pub fn new(current_sequence_id: u64) -> Self {
        Self {
            msg_type: "connected".to_string(),
            current_sequence_id,
        }
    }
}

/// Pong response message
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PongMessage {
    #[serde(rename = "type")]
    pub msg_type: String,
}

impl Default for PongMessage {
    fn default() -> Self {
        Self {
            msg_type: "pong".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_message_serialization() {
        let msg = PushMessage {
            event: RelayEvent::VideoFrame {
                frame: "AAA".to_string(),
            },
            sequence_id: 42,
            timestamp: 1234567890,
        };

        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains(r#""type":"video-frame""#));
        assert!(json.contains(r#""frame":"AAA""#));
        assert!(json.contains(r#""sequence_id":42"#));
    }

    #[test]
    fn test_push_message_round_trip() {
        let json = r#"{"type":"video-frame","frame":"BBB","sequence_id":7,"timestamp":0}"#;
        let msg: PushMessage = serde_json::from_str(json).unwrap();

        assert_eq!(msg.sequence_id, 7);
        assert!(matches!(msg.event, RelayEvent::VideoFrame { ref frame } if frame == "BBB"));
    }

    #[test]
    fn test_client_message_parsing() {
        let json = r#"{"type":"ping"}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        assert!(matches!(msg, ClientMessage::Ping));
    }

    #[test]
    fn test_welcome_message_shape() {
        let json = serde_json::to_string(&WelcomeMessage::new(3)).unwrap();
        assert!(json.contains(r#""type":"connected""#));
        assert!(json.contains(r#""current_sequence_id":3"#));
    }
}
