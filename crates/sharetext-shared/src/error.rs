use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShareError {
    #[error("Invalid share identifier: {0}")]
    InvalidIdentifier(String),
}
