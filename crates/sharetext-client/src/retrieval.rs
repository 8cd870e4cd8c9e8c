//! View-a-message flow.
//!
//! At most one retrieval is in flight per [`RetrievalFlow`]. Starting a new
//! one cancels the previous token first, and a retrieval re-checks its own
//! token under the view lock before touching any state, so a late response
//! can never overwrite a newer one.

use chrono::Utc;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use sharetext_shared::constants::FAILED_TO_LOAD;
use sharetext_shared::protocol::normalize_response;
use sharetext_store::{HistoryCache, HistoryItem};

use crate::error::ClientError;
use crate::service::MessageService;

struct ViewState {
    message: String,
    loading: bool,
    error: Option<String>,
    history: HistoryCache,
}

/// Point-in-time copy of what the view displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSnapshot {
    pub message: String,
    pub loading: bool,
    pub error: Option<String>,
    pub history: Vec<HistoryItem>,
}

pub struct RetrievalFlow<S> {
    service: S,
    view: Mutex<ViewState>,
    in_flight: Mutex<Option<CancellationToken>>,
}

impl<S: MessageService> RetrievalFlow<S> {
    /// Mount the view over an already loaded history.
    pub fn new(service: S, history: HistoryCache) -> Self {
        Self {
            service,
            view: Mutex::new(ViewState {
                message: String::new(),
                loading: false,
                error: None,
                history,
            }),
            in_flight: Mutex::new(None),
        }
    }

    /// Fetch and display the message for `id` (or the bare `/view` route).
    ///
    /// Returns [`ClientError::Cancelled`] when a newer call superseded this
    /// one; in that case nothing was changed.
    pub async fn retrieve(&self, id: Option<&str>) -> Result<String, ClientError> {
        let token = CancellationToken::new();
        if let Some(previous) = self.in_flight.lock().await.replace(token.clone()) {
            previous.cancel();
            debug!("Cancelled previous retrieval");
        }

        {
            let mut view = self.view.lock().await;
            if token.is_cancelled() {
                return Err(ClientError::Cancelled);
            }
            view.loading = true;
        }

        let result = tokio::select! {
            biased;
            _ = token.cancelled() => return Err(ClientError::Cancelled),
            result = self.service.fetch(id) => result,
        };

        let mut view = self.view.lock().await;
        if token.is_cancelled() {
            return Err(ClientError::Cancelled);
        }
        view.loading = false;

        match result {
            Ok(body) => {
                let message = normalize_response(&body);
                view.message = message.clone();
                view.error = None;

                match view.history.record(&message, Utc::now().timestamp_millis()) {
                    Ok(true) => debug!(entries = view.history.len(), "History updated"),
                    Ok(false) => {}
                    Err(e) => warn!(error = %e, "Failed to persist history"),
                }

                info!(id = id.unwrap_or("-"), len = message.len(), "Message retrieved");
                Ok(message)
            }
            Err(e) => {
                warn!(error = %e, "Failed to load message");
                view.message = FAILED_TO_LOAD.to_string();
                view.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Display a history entry in place of the current message.
    pub async fn show_history(&self, index: usize) -> Option<String> {
        let mut view = self.view.lock().await;
        let message = view.history.get(index)?.message.clone();
        view.message = message.clone();
        Some(message)
    }

    pub async fn clear_history(&self) -> Result<(), ClientError> {
        self.view.lock().await.history.clear()?;
        Ok(())
    }

    pub async fn snapshot(&self) -> ViewSnapshot {
        let view = self.view.lock().await;
        ViewSnapshot {
            message: view.message.clone(),
            loading: view.loading,
            error: view.error.clone(),
            history: view.history.items().to_vec(),
        }
    }
}
