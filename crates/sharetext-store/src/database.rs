//! Database connection management.
//!
//! The [`Database`] struct owns a [`rusqlite::Connection`] and guarantees that
//! migrations are run before any other operation.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use rusqlite::Connection;

use crate::error::{Result, StoreError};
use crate::migrations;

/// Wrapper around a [`rusqlite::Connection`].
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the default application database.
    ///
    /// The database file is placed in the platform-appropriate data directory:
    /// - Linux:   `~/.local/share/sharetext/sharetext.db`
    /// - macOS:   `~/Library/Application Support/app.sharetext.sharetext/sharetext.db`
    /// - Windows: `{FOLDERID_RoamingAppData}\sharetext\sharetext\data\sharetext.db`
    pub fn new() -> Result<Self> {
        let path = Self::default_path()?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        tracing::info!(path = %path.display(), "opening database");

        Self::open_at(&path)
    }

    /// Location used by [`Database::new`].
    pub fn default_path() -> Result<PathBuf> {
        let project_dirs =
            ProjectDirs::from("app", "sharetext", "sharetext").ok_or(StoreError::NoDataDir)?;
        Ok(project_dirs.data_dir().join("sharetext.db"))
    }

    /// Open (or create) a database at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;

        migrations::run_migrations(&conn)?;

        Ok(Self { conn })
    }

    /// Open a throwaway database that lives only as long as the handle.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        migrations::run_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// Return a reference to the underlying `rusqlite::Connection`.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Return the filesystem path of the open database (if any).
    pub fn path(&self) -> Option<PathBuf> {
        self.conn
            .path()
            .map(PathBuf::from)
            .filter(|p| !p.as_os_str().is_empty())
    }
}
