//! Server configuration

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default listening port; deploy targets override it via `PORT`
pub const DEFAULT_PORT: u16 = 10000;

/// Default request body cap, sized for base64-encoded camera frames
pub const DEFAULT_MAX_FRAME_BYTES: usize = 10 * 1024 * 1024; // 10MB

/// Server configuration options
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,

    /// Maximum accepted request body size in bytes
    pub max_frame_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            max_frame_bytes: DEFAULT_MAX_FRAME_BYTES,
        }
    }
}

impl ServerConfig {
    /// Read configuration from the environment.
    ///
    /// `PORT` overrides the listening port; an absent or unparseable
    /// value falls back to [`DEFAULT_PORT`].
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|raw| raw.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port),
            ..Default::default()
        }
    }

    /// Set the bind address
    pub fn bind(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    /// Set the request body cap
    pub fn max_frame_bytes(mut self, bytes: usize) -> Self {
        self.max_frame_bytes = bytes;
        self
    }
}
