//! Broadcast hub
//!
//! The hub is the single owner of all shared relay state: the viewer
//! registry, the last-frame cache, and the frame counter. Mutations go
//! through one lock, so every event (ingest, register, unregister) is a
//! single logical mutation point and concurrent producers serialize on
//! lock acquisition — last write wins by arrival order.
//!
//! Fan-out never blocks: each viewer has an unbounded delivery queue and
//! the hub only pushes into it. A queue whose receiver is gone counts as
//! an implicit disconnect and is dropped from the registry.

mod connection;
mod events;

pub use connection::{ConnectionId, ConnectionState, ViewerConnection};
pub use events::{ClientMessage, PongMessage, PushMessage, RelayEvent, WelcomeMessage};

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::mpsc;

/// Serialized push message, shared across all viewer queues
pub type WirePayload = Arc<str>;

/// Sending half of a viewer's delivery queue
pub type ViewerSender = mpsc::UnboundedSender<WirePayload>;

/// The most recently ingested frame, kept wire-ready for replay
#[derive(Clone, Debug)]
struct CachedFrame {
    wire: WirePayload,
    sequence: u64,
}

/// Acknowledgement data for one successful ingest
#[derive(Clone, Copy, Debug)]
pub struct FrameReceipt {
    /// Sequence number assigned to the frame (1-based)
    pub sequence: u64,

    /// Viewers registered after fan-out completed
    pub viewers: usize,
}

/// Observable hub state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HubStats {
    pub connected_viewers: usize,
    pub frames_total: u64,
    pub has_current_frame: bool,
}

struct HubInner {
    viewers: HashMap<ConnectionId, ViewerSender>,
    current: Option<CachedFrame>,
    frames_total: u64,
}

/// Broadcast hub owning the viewer set and the single-frame cache
pub struct BroadcastHub {
    inner: RwLock<HubInner>,
    next_connection_id: AtomicU64,
}

impl BroadcastHub {
    /// Create an empty hub: no viewers, no cached frame
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HubInner {
                viewers: HashMap::new(),
                current: None,
                frames_total: 0,
            }),
            next_connection_id: AtomicU64::new(1),
        }
    }

    /// Register a viewer delivery queue and return its connection id.
    ///
    /// If a frame is cached it is replayed into this queue immediately,
    /// so a late joiner never waits for the next producer frame. The
    /// replay happens under the registry lock, before any subsequent
    /// `publish` can reach the queue.
    pub fn register(&self, sender: ViewerSender) -> ConnectionId {
        let id = ConnectionId::new(self.next_connection_id.fetch_add(1, Ordering::Relaxed));

        let mut inner = self.inner.write();
        if let Some(cached) = &inner.current {
            // Catch-up push; a closed queue fails like any other send
            let _ = sender.send(cached.wire.clone());
            tracing::debug!(connection = %id, sequence = cached.sequence, "replayed cached frame");
        }
        inner.viewers.insert(id, sender);
        id
    }

    /// Create a delivery queue and register it in one step
    pub fn attach(&self) -> (ConnectionId, mpsc::UnboundedReceiver<WirePayload>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (self.register(tx), rx)
    }

    /// Remove a viewer from the registry.
    ///
    /// Idempotent: unregistering an unknown or already-removed id is a
    /// no-op. Returns whether the viewer was actually present.
    pub fn unregister(&self, id: ConnectionId) -> bool {
        self.inner.write().viewers.remove(&id).is_some()
    }

    /// Cache `frame` and fan it out to every registered viewer.
    ///
    /// The wire message is serialized before any state is touched, so a
    /// serialization fault leaves the previous frame and counter intact.
    /// Delivery is fire-and-forget, at most once per viewer per frame;
    /// queues whose receiver is gone are removed from the registry
    /// without affecting the remaining viewers.
    pub fn publish(&self, frame: String) -> Result<FrameReceipt, serde_json::Error> {
        let mut inner = self.inner.write();

        let sequence = inner.frames_total + 1;
        let msg = PushMessage {
            event: RelayEvent::VideoFrame { frame },
            sequence_id: sequence,
            timestamp: chrono::Utc::now().timestamp(),
        };
        let wire: WirePayload = serde_json::to_string(&msg)?.into();

        inner.current = Some(CachedFrame {
            wire: wire.clone(),
            sequence,
        });
        inner.frames_total = sequence;

        let mut dropped = Vec::new();
        for (id, tx) in &inner.viewers {
            if tx.send(wire.clone()).is_err() {
                dropped.push(*id);
            }
        }
        for id in dropped {
            inner.viewers.remove(&id);
            tracing::debug!(connection = %id, "viewer queue closed, treating as disconnect");
        }

        Ok(FrameReceipt {
            sequence,
            viewers: inner.viewers.len(),
        })
    }

    /// Sequence number of the most recent frame (0 before the first ingest)
    pub fn current_sequence(&self) -> u64 {
        self.inner.read().frames_total
    }

    /// Number of currently registered viewers
    pub fn viewer_count(&self) -> usize {
        self.inner.read().viewers.len()
    }

    /// Snapshot of the observable counters
    pub fn stats(&self) -> HubStats {
        let inner = self.inner.read();
        HubStats {
            connected_viewers: inner.viewers.len(),
            frames_total: inner.frames_total,
            has_current_frame: inner.current.is_some(),
        }
    }
}

impl Default for BroadcastHub {
    fn default() -> Self {
        Self::new()
    }
}
