//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use carstore_core::car::Car;
use carstore_core::storage::{CarRepository, Result};

/// In-memory storage backend.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    cars: Arc<RwLock<HashMap<String, Car>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CarRepository for InMemoryRepository {
    async fn get_car(&self, id: &str) -> Result<Option<Car>> {
        let cars = self.cars.read().await;
        Ok(cars.get(id).cloned())
    }

    async fn put_car(&self, car: &Car) -> Result<()> {
        let mut cars = self.cars.write().await;
        cars.insert(car.id.clone(), car.clone());
        Ok(())
    }

    async fn list_cars(&self) -> Result<Vec<Car>> {
        let cars = self.cars.read().await;
        let mut all: Vec<Car> = cars.values().cloned().collect();
        // Stable output regardless of HashMap iteration order
        all.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(all)
    }
}
