//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SUITABILITY_RANK` prefix and nested values use double underscores as separators.
//!
//! Every setting has a default, so an empty environment yields a usable
//! configuration.
//!
//! # Example
//!
//! ```no_run
//! use suitability_rank::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let engine = config.engine.build_engine();
//! ```

mod engine;
mod error;
mod presentation;

pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use presentation::PresentationConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Ranking engine configuration (tie tolerance, normalization, weighting)
    #[serde(default)]
    pub engine: EngineConfig,

    /// Presentation configuration (rounding, suitability bands)
    #[serde(default)]
    pub presentation: PresentationConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SUITABILITY_RANK` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SUITABILITY_RANK__ENGINE__TIE_TOLERANCE=1e-12` -> `engine.tie_tolerance = 1e-12`
    /// - `SUITABILITY_RANK__PRESENTATION__DECIMALS=2` -> `presentation.decimals = 2`
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
                    .prefix("SUITABILITY_RANK")
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
        self.engine.validate()?;
        self.presentation.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ranking::{NormalizationMethod, WeightingMethod};
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "SUITABILITY_RANK__ENGINE__TIE_TOLERANCE",
        "SUITABILITY_RANK__ENGINE__NORMALIZATION",
        "SUITABILITY_RANK__ENGINE__WEIGHTING",
        "SUITABILITY_RANK__PRESENTATION__DECIMALS",
        "SUITABILITY_RANK__PRESENTATION__SUITABLE_THRESHOLD",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.engine.tie_tolerance, 1e-9);
        assert_eq!(config.presentation.decimals, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_engine_settings_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SUITABILITY_RANK__ENGINE__TIE_TOLERANCE", "0.000001");
        env::set_var("SUITABILITY_RANK__ENGINE__NORMALIZATION", "vector");
        env::set_var("SUITABILITY_RANK__ENGINE__WEIGHTING", "standard_deviation");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.engine.tie_tolerance, 0.000001);
        assert_eq!(config.engine.normalization, NormalizationMethod::Vector);
        assert_eq!(config.engine.weighting, WeightingMethod::StandardDeviation);
    }

    #[test]
    fn test_load_presentation_settings_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SUITABILITY_RANK__PRESENTATION__DECIMALS", "2");
        env::set_var("SUITABILITY_RANK__PRESENTATION__SUITABLE_THRESHOLD", "0.75");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.presentation.decimals, 2);
        assert_eq!(config.presentation.suitable_threshold, 0.75);
        assert_eq!(config.presentation.marginal_threshold, 0.5);
    }

    #[test]
    fn test_validate_reports_bad_tolerance() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SUITABILITY_RANK__ENGINE__TIE_TOLERANCE", "0.5");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidTieTolerance(0.5))
        );
    }
}
