//! Application configuration module
//!
//! This module provides type-safe configuration loading using the `config`
//! and `dotenvy` crates. Values layer in order: built-in defaults, an
//! optional `config/default.toml`, an optional `config/{RUN_MODE}.toml`,
//! then environment variables with the `RECOVERY_DESK` prefix where nested
//! values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use recovery_desk::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Custom intents at {}", config.knowledge.custom_intents_path);
//! ```

mod error;

pub use error::{ConfigError, ValidationError};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`]; every field has a working default so
/// the service runs with no configuration at all.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Knowledge base configuration (custom intents file)
    #[serde(default)]
    pub knowledge: KnowledgeConfig,

    /// Logging configuration (filter directive)
    #[serde(default)]
    pub log: LogConfig,
}

/// Knowledge base configuration
#[derive(Debug, Clone, Deserialize)]
pub struct KnowledgeConfig {
    /// Path of the JSON file holding operator-added intents
    #[serde(default = "default_custom_intents_path")]
    pub custom_intents_path: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Tracing filter directive, same syntax as RUST_LOG
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads `config/default.toml` and `config/{RUN_MODE}.toml` if present
    /// 3. Applies environment variables with the `RECOVERY_DESK` prefix
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `RECOVERY_DESK__KNOWLEDGE__CUSTOM_INTENTS_PATH=./kb.json`
    ///   -> `knowledge.custom_intents_path = ./kb.json`
    /// - `RECOVERY_DESK__LOG__FILTER=debug` -> `log.filter = debug`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a present file cannot be parsed or values
    /// cannot be deserialized into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::default()
                    .prefix("RECOVERY_DESK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.knowledge.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

impl KnowledgeConfig {
    /// Validate knowledge base configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.custom_intents_path.trim().is_empty() {
            return Err(ValidationError::EmptyIntentsPath);
        }
        if !self.custom_intents_path.ends_with(".json") {
            return Err(ValidationError::IntentsPathNotJson);
        }
        Ok(())
    }
}

impl LogConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.filter.trim().is_empty() {
            return Err(ValidationError::EmptyLogFilter);
        }
        Ok(())
    }
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            custom_intents_path: default_custom_intents_path(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_custom_intents_path() -> String {
    "./data/custom_intents.json".to_string()
}

fn default_log_filter() -> String {
    "info,recovery_desk=debug".to_string()
}
