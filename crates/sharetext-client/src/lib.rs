//! # sharetext-client
//!
//! Client side of ShareText: compose and send a message, view the current
//! message, and keep a local list of recently viewed messages.

pub mod commands;
pub mod config;
pub mod error;
pub mod retrieval;
pub mod service;
pub mod submission;

#[cfg(test)]
mod testing;

pub use config::ClientConfig;
pub use error::ClientError;
pub use retrieval::{RetrievalFlow, ViewSnapshot};
pub use service::{HttpMessageService, MessageService};
pub use submission::{ShareLink, SubmissionFlow, SubmitStatus};
