use std::{env, time::Duration};

use thiserror::Error;

/// Errors caused by missing or invalid deployment configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("TABLE_NAME environment variable is not set")]
    MissingTableName,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the DynamoDB table holding car records.
    /// `None` when `TABLE_NAME` is unset or empty.
    pub table_name: Option<String>,
    /// Custom DynamoDB endpoint (for local DynamoDB).
    pub endpoint_url: Option<String>,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TABLE_NAME` - DynamoDB table name (required for the DynamoDB backend)
    /// - `AWS_ENDPOINT_URL` - Custom DynamoDB endpoint (optional)
    /// - `REQUEST_TIMEOUT_SECONDS` - Per-request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            table_name: lookup("TABLE_NAME").filter(|v| !v.is_empty()),
            endpoint_url: lookup("AWS_ENDPOINT_URL").filter(|v| !v.is_empty()),
            request_timeout_seconds: lookup("REQUEST_TIMEOUT_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get the configured table name.
    pub fn table_name(&self) -> Result<&str, ConfigError> {
        self.table_name
            .as_deref()
            .ok_or(ConfigError::MissingTableName)
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    /// Defaults with no environment applied.
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
