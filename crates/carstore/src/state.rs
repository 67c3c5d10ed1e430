//! Application state shared by every request handler.
//!
//! The car repository is resolved once at startup. When the deployment is
//! missing its table binding the state keeps the [`ConfigError`] instead, and
//! every car request answers with it until the process is reconfigured.

use std::sync::Arc;

use carstore_core::storage::CarRepository;

use crate::config::ConfigError;
use crate::storage::InMemoryRepository;

/// Shared application state.
///
/// This is cloned for each request handler. It holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    car_repo: Result<Arc<dyn CarRepository>, ConfigError>,
}

impl AppState {
    /// Creates a new AppState backed by the given repository.
    pub fn new(car_repo: Arc<dyn CarRepository>) -> Self {
        Self {
            car_repo: Ok(car_repo),
        }
    }

    /// Creates an AppState for a deployment whose storage is not configured.
    pub fn misconfigured(error: ConfigError) -> Self {
        Self {
            car_repo: Err(error),
        }
    }

    /// Get the car repository, or the configuration error that prevented
    /// building one.
    pub fn car_repo(&self) -> Result<Arc<dyn CarRepository>, ConfigError> {
        self.car_repo.clone()
    }
}

impl Default for AppState {
    /// In-memory storage.
    fn default() -> Self {
        Self::new(Arc::new(InMemoryRepository::new()))
    }
}
