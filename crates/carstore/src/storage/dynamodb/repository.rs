//! DynamoDB repository implementation.
//!
//! Implements [`CarRepository`] from `carstore_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use carstore_core::car::Car;
use carstore_core::storage::{CarRepository, Result};

use super::conversions::{car_key, car_to_item, item_to_car};
use super::error::{map_get_item_error, map_put_item_error, map_scan_error};

/// DynamoDB-based repository implementation.
///
/// The SDK client is safe for concurrent use and manages its own connection
/// pool, so a single repository is shared by every request.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository using the AWS SDK default credential chain.
    ///
    /// On Lambda this resolves the execution role. `endpoint_url` points the
    /// client at a local DynamoDB instead of AWS.
    pub async fn connect(table_name: impl Into<String>, endpoint_url: Option<&str>) -> Self {
        let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

        if let Some(endpoint) = endpoint_url {
            sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
        }

        let sdk_config = sdk_config_loader.load().await;
        Self::new(Client::new(&sdk_config), table_name)
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl CarRepository for DynamoDbRepository {
    async fn get_car(&self, id: &str) -> Result<Option<Car>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(car_key(id)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_car(&item)?)),
            None => Ok(None),
        }
    }

    async fn put_car(&self, car: &Car) -> Result<()> {
        // No condition expression: the last writer wins.
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(car_to_item(car)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn list_cars(&self) -> Result<Vec<Car>> {
        let mut cars = Vec::new();
        let mut exclusive_start_key = None;

        loop {
            let result = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(exclusive_start_key)
                .send()
                .await
                .map_err(map_scan_error)?;

            for item in result.items.unwrap_or_default() {
                cars.push(item_to_car(&item)?);
            }

            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => exclusive_start_key = Some(key),
                _ => break,
            }
        }

        tracing::debug!(table = %self.table_name, count = cars.len(), "Scanned cars");

        Ok(cars)
    }
}
