//! # sharetext-server
//!
//! HTTP service behind ShareText.
//!
//! This binary provides:
//! - **`POST /`** to replace the current message (JSON `{ message, id? }`)
//! - **`GET /view`** and **`GET /view/:id`** to read it back as plain text;
//!   the id is accepted but every id reads the same single slot
//! - **`GET /`** as a liveness check
//!
//! The message lives in memory only and is lost on restart.

mod api;
mod config;
mod error;
mod store;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use sharetext_shared::constants::APP_NAME;

use crate::api::AppState;
use crate::config::ServerConfig;
use crate::store::MessageStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // -----------------------------------------------------------------------
    // 1. Initialize tracing (respects RUST_LOG env var)
    // -----------------------------------------------------------------------
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,sharetext_server=debug")),
        )
        .init();

    info!("Starting {} server v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    // -----------------------------------------------------------------------
    // 2. Load configuration
    // -----------------------------------------------------------------------
    let config = ServerConfig::from_env();
    info!(?config, "Loaded configuration");

    // -----------------------------------------------------------------------
    // 3. Build state and run the HTTP server (blocks until shutdown)
    // -----------------------------------------------------------------------
    let http_addr = config.http_addr;
    let store = Arc::new(MessageStore::new());
    let app_state = AppState {
        store: store.clone(),
        config: Arc::new(config),
    };

    tokio::select! {
        result = api::serve(app_state, http_addr) => {
            if let Err(e) = result {
                tracing::error!(error = %e, "HTTP server failed");
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            let submissions = store.submissions().await;
            info!(
                submissions = submissions.len(),
                last_ts = submissions.last().map(|r| r.ts.as_str()).unwrap_or("-"),
                "Received Ctrl+C, shutting down; stored message is discarded"
            );
        }
    }

    Ok(())
}
