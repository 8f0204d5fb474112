//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PROCUREMENT_ANALYTICS` prefix and nested values use double underscores as
//! separators. Every section has defaults, so an empty environment is valid.
//!
//! # Example
//!
//! ```no_run
//! use procurement_analytics::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Default method: {}", config.ranking.default_method);
//! ```

mod error;
mod logging;
mod ranking;
mod risk;
mod simulation;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use ranking::{RankingConfig, UNLISTED_CRITERION_WEIGHT};
pub use risk::RiskConfig;
pub use simulation::{SimulationConfig, DEFAULT_FX_ANCHOR, DEFAULT_FX_VOLATILITY};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Ranking method, PROMETHEE thresholds, criterion weights
    #[serde(default)]
    pub ranking: RankingConfig,

    /// Path/horizon limits, seed, FX tables
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Supplier risk dimension weights
    #[serde(default)]
    pub risk: RiskConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PROCUREMENT_ANALYTICS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PROCUREMENT_ANALYTICS__RANKING__DEFAULT_METHOD=PROMETHEE`
    /// - `PROCUREMENT_ANALYTICS__SIMULATION__SEED=42`
    /// - `PROCUREMENT_ANALYTICS__SIMULATION__FX_VOLATILITIES__EUR=0.09`
    /// - `PROCUREMENT_ANALYTICS__RANKING__CRITERION_WEIGHTS__COST=0.25`
    ///
    /// Weight and FX tables are overlays: each variable replaces one entry of
    /// the built-in table and leaves the rest in place.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PROCUREMENT_ANALYTICS")
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
        self.logging.validate()?;
        self.ranking.validate()?;
        self.simulation.validate()?;
        self.risk.validate()?;
        Ok(())
    }
}
