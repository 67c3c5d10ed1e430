use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use carstore_core::car::CarError;
use carstore_core::storage::{repository_error_to_status_code, RepositoryError};
use thiserror::Error;

use crate::config::ConfigError;

/// Errors a car handler can answer with.
///
/// Every variant becomes a plain-text response whose body is the error's
/// display text.
#[derive(Debug, Error)]
pub enum AppError {
    /// The write body is not a car.
    #[error(transparent)]
    InvalidBody(#[from] CarError),
    /// No car is stored under the requested ID.
    #[error("item not found")]
    NotFound(String),
    /// The deployment is missing its storage configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Repository(err) => StatusCode::from_u16(repository_error_to_status_code(err))
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::InvalidBody(CarError::InvalidBody(detail)) => {
                tracing::warn!(status = %status, detail = %detail, "Rejected request body");
            }
            AppError::NotFound(id) => {
                tracing::debug!(car_id = %id, "Car not found");
            }
            AppError::Config(err) => {
                tracing::error!(status = %status, error = %err, "Storage is not configured");
            }
            AppError::Repository(err) => {
                tracing::error!(status = %status, error = %err, "Repository error");
            }
        }

        (status, self.to_string()).into_response()
    }
}
