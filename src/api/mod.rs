//! API module for HTTP and WebSocket endpoints
//!
//! This module provides the frame ingest endpoint, the status endpoints,
//! and the WebSocket push channel for viewers.

pub mod http;
pub mod rest;
pub mod websocket;
