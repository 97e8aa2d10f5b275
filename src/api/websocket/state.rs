//! Shared application state for the HTTP and WebSocket surface

use std::sync::Arc;

use crate::hub::BroadcastHub;

/// Shared state handed to every handler
pub struct AppState {
    /// The broadcast hub
    pub hub: Arc<BroadcastHub>,
}

impl AppState {
    /// Create a new AppState around the given hub
    pub fn new(hub: Arc<BroadcastHub>) -> Self {
        Self { hub }
    }
}
