//! WebSocket connection handler

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use futures::stream::SplitSink;
use futures::{SinkExt, StreamExt};

use super::state::AppState;
use crate::hub::{ClientMessage, PongMessage, ViewerConnection, WelcomeMessage};

/// WebSocket upgrade handler
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Drive one viewer connection until the peer goes away
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sink, mut stream) = socket.split();

    // Registering attaches the delivery queue; the cached frame (if any)
    // is already replayed into it at this point
    let (id, mut frames) = state.hub.attach();
    let mut conn = ViewerConnection::new(id);
    conn.open();
    tracing::info!(
        connection = %id,
        viewers = state.hub.viewer_count(),
        "viewer connected"
    );

    // Welcome message carries the current sequence so the client can spot gaps
    let welcome = WelcomeMessage::new(state.hub.current_sequence());
    if let Ok(json) = serde_json::to_string(&welcome) {
        if sink.send(Message::Text(json)).await.is_err() {
            // Peer vanished during the handshake
            teardown(&state, &mut conn);
            return;
        }
    }

    loop {
        tokio::select! {
            // Frames queued by the hub (catch-up replay included)
            payload = frames.recv() => {
                match payload {
                    Some(wire) => {
                        if sink.send(Message::Text(wire.to_string())).await.is_err() {
                            break; // Peer disconnected mid-send
                        }
                    }
                    None => break, // Hub dropped this queue
                }
            }

            // Inbound client traffic
            incoming = stream.next() => {
                match incoming {
                    Some(Ok(msg)) => {
                        if !handle_client_message(msg, &mut sink).await {
                            break; // Peer requested close
                        }
                    }
                    Some(Err(_)) => break, // Transport error
                    None => break, // Peer disconnected
                }
            }
        }
    }

    teardown(&state, &mut conn);
}

/// Unregister from the hub and finish the connection state machine
fn teardown(state: &AppState, conn: &mut ViewerConnection) {
    state.hub.unregister(conn.id());
    conn.close();
    tracing::info!(
        connection = %conn.id(),
        viewers = state.hub.viewer_count(),
        "viewer disconnected"
    );
}

/// Handle a message from the client.
/// Returns false if the connection should be closed.
async fn handle_client_message(msg: Message, sink: &mut SplitSink<WebSocket, Message>) -> bool {
    match msg {
        Message::Text(text) => {
            if let Ok(ClientMessage::Ping) = serde_json::from_str::<ClientMessage>(&text) {
                if let Ok(json) = serde_json::to_string(&PongMessage::default()) {
                    let _ = sink.send(Message::Text(json)).await;
                }
            }
            true
        }
        Message::Binary(_) => true, // Ignore binary messages
        Message::Ping(data) => {
            let _ = sink.send(Message::Pong(data)).await;
            true
        }
        Message::Pong(_) => true, // Ignore pong responses
        Message::Close(_) => false, // Client requested close
    }
}
