//! # sharetext-shared
//!
//! Types and helpers shared by the ShareText server and clients: the submit
//! request body, response normalization, share identifiers and message
//! statistics.

pub mod constants;
pub mod error;
pub mod protocol;
pub mod share;
pub mod types;

pub use error::ShareError;
