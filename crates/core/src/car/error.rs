use thiserror::Error;

/// Errors that can occur when reading a car record from a request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CarError {
    #[error("invalid request body")]
    InvalidBody(String),
}
