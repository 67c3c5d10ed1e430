//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of [`CarRepository`]
//! using `aws-sdk-dynamodb`. The table has a single string hash key `ID`.
//!
//! [`CarRepository`]: carstore_core::storage::CarRepository

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
