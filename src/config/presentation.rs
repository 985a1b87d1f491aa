//! Result presentation configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::ranking::{
    BandThresholds, DEFAULT_MARGINAL_THRESHOLD, DEFAULT_SUITABLE_THRESHOLD,
};

const MAX_DECIMALS: u8 = 12;

/// How ranked scores are rounded and banded for display
#[derive(Debug, Clone, Deserialize)]
pub struct PresentationConfig {
    /// Decimal places of displayed scores
    #[serde(default = "default_decimals")]
    pub decimals: u8,

    /// Scores above this are suitable
    #[serde(default = "default_suitable_threshold")]
    pub suitable_threshold: f64,

    /// Scores at or above this are at least marginal
    #[serde(default = "default_marginal_threshold")]
    pub marginal_threshold: f64,
}

impl PresentationConfig {
    /// Get the band thresholds
    pub fn thresholds(&self) -> BandThresholds {
        BandThresholds {
            suitable: self.suitable_threshold,
            marginal: self.marginal_threshold,
        }
    }

    /// Validate presentation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.decimals > MAX_DECIMALS {
            return Err(ValidationError::TooManyDecimals {
                max: MAX_DECIMALS,
                actual: self.decimals,
            });
        }
        if !(0.0..=1.0).contains(&self.suitable_threshold) {
            return Err(ValidationError::ThresholdOutOfRange("suitable_threshold"));
        }
        if !(0.0..=1.0).contains(&self.marginal_threshold) {
            return Err(ValidationError::ThresholdOutOfRange("marginal_threshold"));
        }
        if self.marginal_threshold > self.suitable_threshold {
            return Err(ValidationError::ThresholdsOutOfOrder);
        }
        Ok(())
    }
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            decimals: default_decimals(),
            suitable_threshold: default_suitable_threshold(),
            marginal_threshold: default_marginal_threshold(),
        }
    }
}

fn default_decimals() -> u8 {
    3
}

fn default_suitable_threshold() -> f64 {
    DEFAULT_SUITABLE_THRESHOLD
}

fn default_marginal_threshold() -> f64 {
    DEFAULT_MARGINAL_THRESHOLD
}
