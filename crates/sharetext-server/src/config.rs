//! Server configuration loaded from environment variables.
//!
//! All settings have sensible defaults so the server can start with zero
//! configuration for local development.

use std::net::SocketAddr;

use sharetext_shared::constants::{DEFAULT_HTTP_PORT, MAX_SUBMIT_BODY};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address for the HTTP (axum) API server.
    /// Env: `HTTP_ADDR`
    /// Default: `0.0.0.0:9090`
    pub http_addr: SocketAddr,

    /// Largest request body accepted on submit, in bytes.
    /// Env: `MAX_BODY_BYTES`
    /// Default: `102400` (100 KiB)
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_addr: ([0, 0, 0, 0], DEFAULT_HTTP_PORT).into(),
            max_body_bytes: MAX_SUBMIT_BODY,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(addr) = lookup("HTTP_ADDR") {
            if let Ok(parsed) = addr.parse::<SocketAddr>() {
                config.http_addr = parsed;
            } else {
                tracing::warn!(value = %addr, "Invalid HTTP_ADDR, using default");
            }
        }

        if let Some(val) = lookup("MAX_BODY_BYTES") {
            match val.parse::<usize>() {
                Ok(n) if n > 0 => config.max_body_bytes = n,
                _ => tracing::warn!(value = %val, "Invalid MAX_BODY_BYTES, using default"),
            }
        }

        // RUST_LOG is handled directly by tracing-subscriber's EnvFilter,
        // so we do not store it here.

        config
    }
}
