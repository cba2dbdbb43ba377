//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Custom intents path must not be empty")]
    EmptyIntentsPath,

    #[error("Custom intents path must end in .json")]
    IntentsPathNotJson,

    #[error("Log filter directive must not be empty")]
    EmptyLogFilter,
}
