//! Single-slot message store.
//!
//! Holds exactly one current message. Every accepted submission replaces it
//! and appends a [`SubmissionRecord`] to an audit log. Lookups never consult
//! the log or any identifier; they return whatever was written last.

use chrono::Local;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info};

use sharetext_shared::constants::NO_MESSAGE_SENTINEL;
use sharetext_shared::types::SubmitRequest;

use crate::error::ServerError;

/// One accepted submission.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub current_message: String,
    pub id: Option<String>,
    /// Local wall-clock time of the submission as `HHMM`.
    pub ts: String,
}

#[derive(Debug)]
struct Inner {
    current: String,
    log: Vec<SubmissionRecord>,
}

/// Process-lifetime storage for the current message. Nothing is persisted;
/// a restart resets to [`NO_MESSAGE_SENTINEL`].
#[derive(Debug)]
pub struct MessageStore {
    inner: Mutex<Inner>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                current: NO_MESSAGE_SENTINEL.to_string(),
                log: Vec::new(),
            }),
        }
    }

    /// Validate and store a submission, returning the stored (trimmed) text.
    /// A rejected submission leaves the store untouched.
    pub async fn submit(&self, req: &SubmitRequest) -> Result<String, ServerError> {
        let message = req.trimmed_message().ok_or(ServerError::MessageRequired)?;

        let record = SubmissionRecord {
            current_message: message.to_string(),
            id: req.id.clone(),
            ts: Local::now().format("%H%M").to_string(),
        };

        let mut inner = self.inner.lock().await;
        inner.current = message.to_string();
        inner.log.push(record);

        info!(
            len = message.chars().count(),
            id = req.id.as_deref().unwrap_or("-"),
            log_len = inner.log.len(),
            "Message stored"
        );

        Ok(inner.current.clone())
    }

    /// The current message. `id` is accepted for the route's sake but does
    /// not select anything: every identifier resolves to the same slot.
    pub async fn retrieve(&self, id: Option<&str>) -> String {
        let inner = self.inner.lock().await;
        debug!(id = id.unwrap_or("-"), "Message retrieved");
        inner.current.clone()
    }

    /// Snapshot of the submission log, oldest first.
    pub async fn submissions(&self) -> Vec<SubmissionRecord> {
        self.inner.lock().await.log.clone()
    }
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(message: &str) -> SubmitRequest {
        SubmitRequest::new(message, None)
    }

    #[tokio::test]
    async fn test_starts_with_sentinel() {
        let store = MessageStore::new();
        assert_eq!(store.retrieve(None).await, NO_MESSAGE_SENTINEL);
        assert!(store.submissions().await.is_empty());
    }

    #[tokio::test]
    async fn test_submit_trims_and_any_id_retrieves() {
        let store = MessageStore::new();
        let stored = store.submit(&req("  hello world\n")).await.unwrap();
        assert_eq!(stored, "hello world");

        assert_eq!(store.retrieve(None).await, "hello world");
        assert_eq!(store.retrieve(Some("anything123")).await, "hello world");
        assert_eq!(store.retrieve(Some("calm-moon-4")).await, "hello world");
    }

    #[tokio::test]
    async fn test_blank_rejected_and_state_unchanged() {
        let store = MessageStore::new();
        store.submit(&req("keep")).await.unwrap();

        for bad in [req(""), req("   "), req("\t\n"), SubmitRequest::default()] {
            let err = store.submit(&bad).await.unwrap_err();
            assert!(matches!(err, ServerError::MessageRequired));
        }

        assert_eq!(store.retrieve(None).await, "keep");
        assert_eq!(store.submissions().await.len(), 1);
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let store = MessageStore::new();
        store.submit(&req("A")).await.unwrap();
        store.submit(&req("B")).await.unwrap();

        assert_eq!(store.retrieve(Some("id-for-a")).await, "B");
    }

    #[tokio::test]
    async fn test_retrieve_is_idempotent() {
        let store = MessageStore::new();
        store.submit(&req("same")).await.unwrap();

        let first = store.retrieve(None).await;
        for _ in 0..5 {
            assert_eq!(store.retrieve(Some("x")).await, first);
        }
    }

    #[tokio::test]
    async fn test_log_records_each_submission() {
        let store = MessageStore::new();
        store
            .submit(&SubmitRequest::new(" one ", Some("bold-sky-1".into())))
            .await
            .unwrap();
        store.submit(&req("two")).await.unwrap();

        let log = store.submissions().await;
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].current_message, "one");
        assert_eq!(log[0].id.as_deref(), Some("bold-sky-1"));
        assert_eq!(log[1].id, None);
        for record in &log {
            assert_eq!(record.ts.len(), 4);
            assert!(record.ts.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = SubmissionRecord {
            current_message: "hi".into(),
            id: None,
            ts: "0930".into(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "currentMessage": "hi", "id": null, "ts": "0930" })
        );
    }
}
