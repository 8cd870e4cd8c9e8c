use thiserror::Error;

use sharetext_shared::ShareError;
use sharetext_store::StoreError;

#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a response (connection refused, timeout,
    /// undecodable body).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Server responded {status}: {body}")]
    Rejected { status: u16, body: String },

    /// A newer retrieval superseded this one.
    #[error("Request cancelled")]
    Cancelled,

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error(transparent)]
    Share(#[from] ShareError),
}

impl ClientError {
    /// Cancellations are expected and never shown to the user.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ClientError::Cancelled)
    }
}
