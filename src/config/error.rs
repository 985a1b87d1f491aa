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
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Tie tolerance must be finite and in [0, 1e-3), got {0}")]
    InvalidTieTolerance(f64),

    #[error("Display decimals must be at most {max}, got {actual}")]
    TooManyDecimals { max: u8, actual: u8 },

    #[error("Band threshold '{0}' must be within [0, 1]")]
    ThresholdOutOfRange(&'static str),

    #[error("Marginal threshold exceeds suitable threshold")]
    ThresholdsOutOfOrder,
}
