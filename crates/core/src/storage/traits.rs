use async_trait::async_trait;

use crate::car::Car;

use super::Result;

/// Storage capability for car records.
///
/// Implementations own the record lifetime. Callers hold no state between
/// calls, so a single implementation is shared across concurrent requests.
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// Gets a car by its ID. Returns `None` when no record has that key.
    async fn get_car(&self, id: &str) -> Result<Option<Car>>;

    /// Writes a car, replacing any record with the same ID.
    async fn put_car(&self, car: &Car) -> Result<()>;

    /// Returns every stored car. The scan is unbounded.
    async fn list_cars(&self) -> Result<Vec<Car>>;
}
