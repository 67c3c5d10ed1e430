//! Storage backend implementations.
//!
//! This module provides concrete implementations of the [`CarRepository`]
//! trait defined in `carstore_core::storage`:
//!
//! - `dynamodb`: AWS DynamoDB backend using `aws-sdk-dynamodb` (production)
//! - `inmemory`: HashMap-backed backend for tests and local runs
//!
//! The backend is chosen at startup with `--storage`.
//!
//! [`CarRepository`]: carstore_core::storage::CarRepository

pub mod dynamodb;
pub mod inmemory;

pub use dynamodb::DynamoDbRepository;
pub use inmemory::InMemoryRepository;
