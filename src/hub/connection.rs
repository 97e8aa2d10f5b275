//! Viewer connection identity and lifecycle

use std::fmt;

/// Identifier assigned to a viewer connection at registration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(u64);

impl ConnectionId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value of the id
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}

/// Lifecycle of a viewer connection, driven by transport events.
///
/// `Disconnected` is terminal: a reconnecting peer gets a brand-new
/// registration with a fresh id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionState {
    /// Transport handshake in progress
    Connecting,
    /// Upgrade completed, frames flow
    Connected,
    /// Peer closed or transport error (terminal)
    Disconnected,
}

/// Per-viewer connection tracking
#[derive(Debug)]
pub struct ViewerConnection {
    id: ConnectionId,
    state: ConnectionState,
}

impl ViewerConnection {
    /// Start tracking a connection in the `Connecting` state
    pub fn new(id: ConnectionId) -> Self {
        Self {
            id,
            state: ConnectionState::Connecting,
        }
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Transport handshake completed
    pub fn open(&mut self) {
        if self.state == ConnectionState::Connecting {
            self.state = ConnectionState::Connected;
        }
    }

    /// Peer-initiated close or transport error. Idempotent.
    pub fn close(&mut self) {
        self.state = ConnectionState::Disconnected;
    }

    pub fn is_connected(&self) -> bool {
        self.state == ConnectionState::Connected
    }
}
