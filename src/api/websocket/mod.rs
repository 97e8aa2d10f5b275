//! WebSocket module for the viewer push channel
//!
//! Provides the `/ws` endpoint that fans ingested frames out to every
//! connected viewer.
//!
//! ## Protocol
//! - On connect the server sends a `connected` welcome with the current
//!   sequence id, then the cached frame (if any) as a catch-up push
//! - Every ingested frame arrives as a `video-frame` message
//! - `{"type":"ping"}` is answered with `{"type":"pong"}`

pub mod handler;
pub mod state;
