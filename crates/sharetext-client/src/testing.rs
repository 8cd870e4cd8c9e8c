//! In-process [`MessageService`] for flow tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::{oneshot, Notify};

use sharetext_shared::protocol::ResponseBody;
use sharetext_shared::types::SubmitRequest;

use crate::error::ClientError;
use crate::service::MessageService;

/// A fetch for `id` that waits for `release` after reporting on `started`.
pub struct Gate {
    pub id: String,
    pub started: Mutex<Option<oneshot::Sender<()>>>,
    pub release: Arc<Notify>,
}

#[derive(Default)]
pub struct FakeService {
    pub bodies: HashMap<String, ResponseBody>,
    pub gate: Option<Gate>,
    pub fail_fetch: bool,
    pub reject_submit: bool,
    pub submitted: Mutex<Vec<SubmitRequest>>,
}

impl FakeService {
    pub fn with_text(mut self, id: &str, text: &str) -> Self {
        self.bodies
            .insert(id.to_string(), ResponseBody::Text(text.to_string()));
        self
    }

    pub fn with_body(mut self, id: &str, body: ResponseBody) -> Self {
        self.bodies.insert(id.to_string(), body);
        self
    }

    /// Hold fetches of `id` until the returned `Notify` fires; the receiver
    /// resolves once such a fetch is in flight.
    pub fn gated(mut self, id: &str) -> (Self, oneshot::Receiver<()>, Arc<Notify>) {
        let (tx, rx) = oneshot::channel();
        let release = Arc::new(Notify::new());
        self.gate = Some(Gate {
            id: id.to_string(),
            started: Mutex::new(Some(tx)),
            release: release.clone(),
        });
        (self, rx, release)
    }
}

impl MessageService for FakeService {
    async fn submit(&self, req: &SubmitRequest) -> Result<String, ClientError> {
        if self.reject_submit {
            return Err(ClientError::Rejected {
                status: 500,
                body: "down".into(),
            });
        }
        self.submitted.lock().unwrap().push(req.clone());
        Ok(req.trimmed_message().unwrap_or_default().to_string())
    }

    async fn fetch(&self, id: Option<&str>) -> Result<ResponseBody, ClientError> {
        let key = id.unwrap_or_default();

        if let Some(gate) = self.gate.as_ref().filter(|g| g.id == key) {
            let started = gate.started.lock().unwrap().take();
            if let Some(tx) = started {
                let _ = tx.send(());
            }
            gate.release.notified().await;
        }

        if self.fail_fetch {
            return Err(ClientError::Rejected {
                status: 502,
                body: "bad gateway".into(),
            });
        }
        Ok(self
            .bodies
            .get(key)
            .cloned()
            .unwrap_or_else(|| ResponseBody::Text(String::new())))
    }
}
