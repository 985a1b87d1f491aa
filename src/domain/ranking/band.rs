//! Suitability bands for presenting scores.

use serde::{Deserialize, Serialize};

/// Scores above this are suitable.
pub const DEFAULT_SUITABLE_THRESHOLD: f64 = 0.6;

/// Scores at or above this (and not suitable) are marginal.
pub const DEFAULT_MARGINAL_THRESHOLD: f64 = 0.5;

/// Coarse classification of a suitability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuitabilityBand {
    Suitable,
    Marginal,
    Unsuitable,
}

/// Score thresholds separating the bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandThresholds {
    pub suitable: f64,
    pub marginal: f64,
}

impl BandThresholds {
    /// Classifies a score.
    ///
    /// `score > suitable` is suitable, `score >= marginal` is marginal,
    /// anything lower is unsuitable.
    pub fn classify(&self, score: f64) -> SuitabilityBand {
        if score > self.suitable {
            SuitabilityBand::Suitable
        } else if score >= self.marginal {
            SuitabilityBand::Marginal
        } else {
            SuitabilityBand::Unsuitable
        }
    }
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            suitable: DEFAULT_SUITABLE_THRESHOLD,
            marginal: DEFAULT_MARGINAL_THRESHOLD,
        }
    }
}
