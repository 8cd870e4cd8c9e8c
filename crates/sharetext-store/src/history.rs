//! Recently viewed messages, newest first.
//!
//! The list is capped at [`HISTORY_CAPACITY`] entries and never holds two
//! entries with the same message text. It is stored as one JSON array under
//! [`HISTORY_KEY`].

use tracing::{debug, warn};

use sharetext_shared::constants::{HISTORY_CAPACITY, HISTORY_KEY, NO_MESSAGE_SENTINEL};

use crate::database::Database;
use crate::error::Result;
use crate::models::HistoryItem;

pub struct HistoryCache {
    db: Database,
    items: Vec<HistoryItem>,
}

impl HistoryCache {
    /// Load the persisted list. A missing or unreadable value yields an
    /// empty history.
    pub fn load(db: Database) -> Result<Self> {
        let items = match db.get_value(HISTORY_KEY)? {
            Some(json) => match serde_json::from_str::<Vec<HistoryItem>>(&json) {
                Ok(items) => dedup_capped(items),
                Err(e) => {
                    warn!(error = %e, "Discarding corrupt history cache");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        debug!(entries = items.len(), "History loaded");
        Ok(Self { db, items })
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&HistoryItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Prepend `message` and persist. Returns `false` without touching the
    /// list when the message is empty, the empty-store sentinel, or already
    /// present.
    pub fn record(&mut self, message: &str, timestamp_ms: i64) -> Result<bool> {
        if message.is_empty() || message == NO_MESSAGE_SENTINEL {
            return Ok(false);
        }
        if self.items.iter().any(|item| item.message == message) {
            return Ok(false);
        }

        let mut next = Vec::with_capacity(HISTORY_CAPACITY);
        next.push(HistoryItem::new(message, timestamp_ms));
        next.extend(self.items.iter().take(HISTORY_CAPACITY - 1).cloned());

        self.persist(&next)?;
        self.items = next;
        Ok(true)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.db.delete_value(HISTORY_KEY)?;
        self.items.clear();
        Ok(())
    }

    fn persist(&self, items: &[HistoryItem]) -> Result<()> {
        let json = serde_json::to_string(items)?;
        self.db.set_value(HISTORY_KEY, &json)
    }
}

/// Keep the first occurrence of each message, up to [`HISTORY_CAPACITY`].
/// Another writer may have stored a list that breaks either rule.
fn dedup_capped(items: Vec<HistoryItem>) -> Vec<HistoryItem> {
    let mut kept: Vec<HistoryItem> = Vec::with_capacity(HISTORY_CAPACITY);
    for item in items {
        if kept.len() == HISTORY_CAPACITY {
            break;
        }
        if !kept.iter().any(|k| k.message == item.message) {
            kept.push(item);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_cache() -> HistoryCache {
        HistoryCache::load(Database::open_in_memory().unwrap()).unwrap()
    }

    #[test]
    fn test_newest_first() {
        let mut cache = empty_cache();
        assert!(cache.record("first", 1).unwrap());
        assert!(cache.record("second", 2).unwrap());

        let messages: Vec<_> = cache.items().iter().map(|i| i.message.as_str()).collect();
        assert_eq!(messages, ["second", "first"]);
    }

    #[test]
    fn test_capped_at_ten() {
        let mut cache = empty_cache();
        for i in 0..11 {
            cache.record(&format!("message {i}"), i).unwrap();
        }

        assert_eq!(cache.len(), HISTORY_CAPACITY);
        assert_eq!(cache.get(0).unwrap().message, "message 10");
        assert_eq!(cache.get(9).unwrap().message, "message 1");
        assert!(cache.items().iter().all(|i| i.message != "message 0"));
    }

    #[test]
    fn test_duplicate_dropped_not_reordered() {
        let mut cache = empty_cache();
        cache.record("a", 1).unwrap();
        cache.record("b", 2).unwrap();

        assert!(!cache.record("a", 3).unwrap());
        let messages: Vec<_> = cache.items().iter().map(|i| i.message.as_str()).collect();
        assert_eq!(messages, ["b", "a"]);
        assert_eq!(cache.get(1).unwrap().timestamp, 1);
    }

    #[test]
    fn test_skips_empty_and_sentinel() {
        let mut cache = empty_cache();
        assert!(!cache.record("", 1).unwrap());
        assert!(!cache.record(NO_MESSAGE_SENTINEL, 1).unwrap());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_persists_across_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.db");

        {
            let mut cache = HistoryCache::load(Database::open_at(&path).unwrap()).unwrap();
            cache.record("keep me", 7).unwrap();
        }

        let cache = HistoryCache::load(Database::open_at(&path).unwrap()).unwrap();
        assert_eq!(cache.items(), &[HistoryItem::new("keep me", 7)]);
    }

    #[test]
    fn test_corrupt_value_loads_empty() {
        let db = Database::open_in_memory().unwrap();
        db.set_value(HISTORY_KEY, "not json").unwrap();

        let cache = HistoryCache::load(db).unwrap();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_load_drops_duplicates_keeping_first() {
        let db = Database::open_in_memory().unwrap();
        let stored = vec![
            HistoryItem::new("a", 3),
            HistoryItem::new("b", 2),
            HistoryItem::new("a", 1),
        ];
        db.set_value(HISTORY_KEY, &serde_json::to_string(&stored).unwrap())
            .unwrap();

        let cache = HistoryCache::load(db).unwrap();
        assert_eq!(cache.items(), &[HistoryItem::new("a", 3), HistoryItem::new("b", 2)]);
    }

    #[test]
    fn test_load_truncates_oversized_list() {
        let db = Database::open_in_memory().unwrap();
        let stored: Vec<_> = (0..15)
            .map(|i| HistoryItem::new(format!("m{i}"), i))
            .collect();
        db.set_value(HISTORY_KEY, &serde_json::to_string(&stored).unwrap())
            .unwrap();

        let cache = HistoryCache::load(db).unwrap();
        assert_eq!(cache.len(), HISTORY_CAPACITY);
        assert_eq!(cache.get(0).unwrap().message, "m0");
        assert_eq!(cache.get(9).unwrap().message, "m9");
    }

    #[test]
    fn test_clear() {
        let mut cache = empty_cache();
        cache.record("gone", 1).unwrap();
        cache.clear().unwrap();
        assert!(cache.is_empty());
        assert_eq!(cache.db.get_value(HISTORY_KEY).unwrap(), None);
    }
}
