//! Ranking engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::ranking::{
    NormalizationMethod, RankingEngine, WeightingMethod, DEFAULT_TIE_TOLERANCE,
};

/// Upper bound on the tie tolerance; anything looser merges real differences.
const MAX_TIE_TOLERANCE: f64 = 1e-3;

/// Ranking engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Relative tolerance under which two scores are tied
    #[serde(default = "default_tie_tolerance")]
    pub tie_tolerance: f64,

    /// Column normalization
    #[serde(default)]
    pub normalization: NormalizationMethod,

    /// Weighting used when a request does not name one
    #[serde(default)]
    pub weighting: WeightingMethod,
}

impl EngineConfig {
    /// Build a ranking engine from these settings
    pub fn build_engine(&self) -> RankingEngine {
        RankingEngine::new(self.tie_tolerance, self.normalization)
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let tolerance = self.tie_tolerance;
        if !tolerance.is_finite() || !(0.0..MAX_TIE_TOLERANCE).contains(&tolerance) {
            return Err(ValidationError::InvalidTieTolerance(tolerance));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tie_tolerance: default_tie_tolerance(),
            normalization: NormalizationMethod::default(),
            weighting: WeightingMethod::default(),
        }
    }
}

fn default_tie_tolerance() -> f64 {
    DEFAULT_TIE_TOLERANCE
}
