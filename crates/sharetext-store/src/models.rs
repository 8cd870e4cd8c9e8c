//! Records persisted in the local key-value store.
//!
//! Field names follow the JSON layout clients have always written under the
//! history key, so existing caches keep loading.

use serde::{Deserialize, Serialize};

use sharetext_shared::constants::PREVIEW_CHARS;

/// A previously viewed message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryItem {
    /// Full message text.
    pub message: String,
    /// When the message was viewed, in milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// First [`PREVIEW_CHARS`] characters, with `...` appended when cut.
    pub preview: String,
}

impl HistoryItem {
    pub fn new(message: impl Into<String>, timestamp: i64) -> Self {
        let message = message.into();
        let preview = preview_of(&message);
        Self {
            message,
            timestamp,
            preview,
        }
    }
}

fn preview_of(message: &str) -> String {
    let mut chars = message.chars();
    let mut preview: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        preview.push_str("...");
    }
    preview
}
