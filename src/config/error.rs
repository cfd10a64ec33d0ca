//! Configuration error types

use thiserror::Error;

/// Errors that occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Errors from semantic validation of configuration values.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Server port must be non-zero")]
    InvalidPort,

    #[error("Request timeout must be between 1 and 300 seconds")]
    InvalidTimeout,

    #[error("Database URL must start with postgres:// or postgresql://")]
    InvalidDatabaseUrl,

    #[error("Database pool must allow at least one connection")]
    InvalidPoolSize,

    #[error("Predictor base URL must start with http:// or https://")]
    InvalidPredictorUrl,

    #[error("Predictor timeout must be between 1 and 60 seconds")]
    InvalidPredictorTimeout,

    #[error("JWT secret must be at least 32 bytes")]
    WeakJwtSecret,
}
