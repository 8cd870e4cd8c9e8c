use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use sharetext_shared::constants::MESSAGE_REQUIRED;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{}", MESSAGE_REQUIRED)]
    MessageRequired,

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// Error bodies are plain text, matching the success bodies.
impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServerError::MessageRequired | ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        (status, self.to_string()).into_response()
    }
}
