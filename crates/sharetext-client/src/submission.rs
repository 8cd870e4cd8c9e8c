//! Compose-and-send flow.
//!
//! The share identifier is generated locally when the flow is created and is
//! what the user is shown as the message's link. The server stores the
//! message in its single slot regardless, so the link does not pin the
//! message it was created for.

use tracing::{info, warn};

use sharetext_shared::constants::FAILED_TO_SEND;
use sharetext_shared::share::{qr_code_url, share_link, ShareId};
use sharetext_shared::types::SubmitRequest;

use crate::error::ClientError;
use crate::service::MessageService;

/// What to show once a message has been sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub id: ShareId,
    /// `<share_base>/<id>`
    pub link: String,
    /// Third-party rendering of `link` as a QR image.
    pub qr_url: String,
}

impl ShareLink {
    pub fn new(share_base: &str, id: ShareId) -> Self {
        let link = share_link(share_base, &id);
        let qr_url = qr_code_url(&link);
        Self { id, link, qr_url }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Sending,
    Sent(ShareLink),
    Failed(String),
}

pub struct SubmissionFlow<S> {
    service: S,
    share_id: ShareId,
    share_base: String,
    input: String,
    status: SubmitStatus,
}

impl<S: MessageService> SubmissionFlow<S> {
    pub fn new(service: S, share_base: impl Into<String>) -> Self {
        Self::with_share_id(service, share_base, ShareId::generate())
    }

    pub fn with_share_id(service: S, share_base: impl Into<String>, share_id: ShareId) -> Self {
        Self {
            service,
            share_id,
            share_base: share_base.into(),
            input: String::new(),
            status: SubmitStatus::Idle,
        }
    }

    pub fn share_id(&self) -> &ShareId {
        &self.share_id
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    /// Send the current input. Blank input is ignored (`Ok(None)`). On
    /// failure the input is kept so the user can send again.
    pub async fn send(&mut self) -> Result<Option<ShareLink>, ClientError> {
        if self.input.trim().is_empty() {
            return Ok(None);
        }

        self.status = SubmitStatus::Sending;
        let req = SubmitRequest::new(self.input.clone(), Some(self.share_id.to_string()));

        match self.service.submit(&req).await {
            Ok(stored) => {
                let link = ShareLink::new(&self.share_base, self.share_id.clone());
                info!(id = %self.share_id, len = stored.len(), "Message sent");
                self.status = SubmitStatus::Sent(link.clone());
                Ok(Some(link))
            }
            Err(e) => {
                warn!(error = %e, "Error sending message");
                self.status = SubmitStatus::Failed(FAILED_TO_SEND.to_string());
                Err(e)
            }
        }
    }

    /// Start over with an empty composer. The share identifier is kept.
    pub fn reset(&mut self) {
        self.input.clear();
        self.status = SubmitStatus::Idle;
    }
}
