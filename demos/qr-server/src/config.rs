//! Server configuration
//!
//! Configuration is read from the environment once at startup and passed
//! down explicitly; nothing else in the tree reads process state.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_PORT: u16 = 8080;

/// Startup configuration for the QR server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Read configuration from `BIND_ADDR` / `SERVER_PORT`
    ///
    /// Unset or unparsable values fall back to `127.0.0.1:8080`.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("BIND_ADDR").ok(),
            std::env::var("SERVER_PORT").ok(),
        )
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Self {
        let host: IpAddr = host
            .and_then(|h| h.parse().ok())
            .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST));
        let port: u16 = port.and_then(|p| p.parse().ok()).unwrap_or(DEFAULT_PORT);

        Self {
            bind_addr: SocketAddr::new(host, port),
        }
    }
}
