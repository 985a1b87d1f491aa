//! Distance Scorer - Weighted distances to reference points and suitability.

use serde::{Deserialize, Serialize};

use super::normalizer::NEUTRAL_VALUE;
use super::{NormalizedMatrix, ReferencePoints};

/// Distances and score for one alternative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlternativeScore {
    /// Weighted Euclidean distance to the ideal point (D+).
    pub distance_to_ideal: f64,
    /// Weighted Euclidean distance to the anti-ideal point (D-).
    pub distance_to_anti_ideal: f64,
    /// `D- / (D+ + D-)`, in [0, 1]; higher is more suitable.
    pub score: f64,
}

/// Relative-closeness scoring.
pub struct DistanceScorer;

impl DistanceScorer {
    /// Scores every alternative against the reference points.
    ///
    /// # Algorithm
    /// `D = sqrt(sum_j w_j * (n_ij - ref_j)^2)` for both reference points;
    /// score = `D- / (D+ + D-)`.
    ///
    /// # Edge Cases
    /// - Both distances zero: score is the neutral 0.5 (only possible when
    ///   every criterion column is constant or carries zero weight)
    /// - Alternative at the ideal point: score 1.0
    /// - Alternative at the anti-ideal point: score 0.0
    /// - Weights near `f64::MAX`: the score is computed from weights divided
    ///   by the largest one, so it stays finite; reported distances may
    ///   still overflow to infinity
    pub fn score(
        normalized: &NormalizedMatrix,
        points: &ReferencePoints,
        weights: &[f64],
    ) -> Vec<AlternativeScore> {
        let largest = weights.iter().copied().fold(0.0_f64, f64::max);
        let (relative, scale) = if largest > 0.0 {
            (
                weights.iter().map(|w| w / largest).collect::<Vec<f64>>(),
                largest.sqrt(),
            )
        } else {
            (weights.to_vec(), 1.0)
        };

        normalized
            .rows
            .iter()
            .map(|row| {
                let to_ideal = Self::weighted_distance(row, &points.ideal, &relative);
                let to_anti_ideal = Self::weighted_distance(row, &points.anti_ideal, &relative);
                AlternativeScore {
                    distance_to_ideal: to_ideal * scale,
                    distance_to_anti_ideal: to_anti_ideal * scale,
                    score: Self::relative_closeness(to_ideal, to_anti_ideal),
                }
            })
            .collect()
    }

    /// Weighted Euclidean distance; each weight scales a squared difference.
    pub fn weighted_distance(values: &[f64], reference: &[f64], weights: &[f64]) -> f64 {
        values
            .iter()
            .zip(reference)
            .zip(weights)
            .map(|((v, r), w)| w * (v - r).powi(2))
            .sum::<f64>()
            .sqrt()
    }

    /// Combines the two distances into a score in [0, 1].
    pub fn relative_closeness(distance_to_ideal: f64, distance_to_anti_ideal: f64) -> f64 {
        let total = distance_to_ideal + distance_to_anti_ideal;
        if total == 0.0 {
            return NEUTRAL_VALUE;
        }
        distance_to_anti_ideal / total
    }
}
