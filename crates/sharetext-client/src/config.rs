//! Client settings.
//!
//! The CLI fills these from flags, each of which falls back to an
//! environment variable and then to the defaults below.

use std::path::PathBuf;

use sharetext_shared::constants::{DEFAULT_SERVER_URL, DEFAULT_SHARE_BASE};
use sharetext_store::{Database, HistoryCache};

use crate::error::ClientError;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the message store.
    /// Env: `SHARETEXT_SERVER_URL`
    pub server_url: String,

    /// Prefix of the shareable link shown after sending.
    /// Env: `SHARETEXT_SHARE_BASE`
    pub share_base: String,

    /// SQLite file holding the recent-history cache. `None` uses the
    /// platform data directory.
    /// Env: `SHARETEXT_HISTORY_DB`
    pub history_db: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            share_base: DEFAULT_SHARE_BASE.to_string(),
            history_db: None,
        }
    }
}

impl ClientConfig {
    pub fn open_history(&self) -> Result<HistoryCache, ClientError> {
        let db = match &self.history_db {
            Some(path) => {
                if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                    std::fs::create_dir_all(dir).map_err(sharetext_store::StoreError::from)?;
                }
                Database::open_at(path)?
            }
            None => Database::new()?,
        };
        Ok(HistoryCache::load(db)?)
    }
}
