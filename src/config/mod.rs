//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SAW` prefix and nested values use double underscores as separators.
//!
//! Configuration only controls presentation (logging, report format). The
//! decision data itself is always supplied in code.
//!
//! # Example
//!
//! ```no_run
//! use saw_decision::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Report format: {:?}", config.report.format);
//! ```

mod error;
mod logging;
mod report;

pub use error::{ConfigError, ValidationError};
pub use logging::LogConfig;
pub use report::{ReportConfig, ReportFormat, MAX_PRECISION};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Logging configuration (filter directive, JSON output)
    #[serde(default)]
    pub log: LogConfig,

    /// Report configuration (format, precision)
    #[serde(default)]
    pub report: ReportConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SAW` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SAW__LOG__LEVEL=warn` -> `log.level = "warn"`
    /// - `SAW__REPORT__FORMAT=json` -> `report.format = Json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().prefix("SAW").separator("__"))
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
        self.log.validate()?;
        self.report.validate()?;
        Ok(())
    }
}
