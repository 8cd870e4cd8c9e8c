//! # sharetext-store
//!
//! Local storage for ShareText clients, backed by SQLite.
//!
//! A small key-value table plays the role a browser's local storage plays for
//! the web client; the recent-history list is kept there as a JSON array.

pub mod database;
pub mod history;
pub mod kv;
pub mod migrations;
pub mod models;

mod error;

pub use database::Database;
pub use error::StoreError;
pub use history::HistoryCache;
pub use models::HistoryItem;
