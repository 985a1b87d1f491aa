//! Ranking Engine - Composes validation, normalization, scoring and ordering.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::foundation::ValidationError;

use super::{
    CriterionNormalizer, DecisionMatrix, DistanceScorer, IdealSolutionResolver, InputValidator,
    NormalizationMethod, Ranker, ReferencePoints, DEFAULT_TIE_TOLERANCE,
};

/// One alternative's place in the ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    /// 1-based rank; 1 is the most suitable.
    pub rank: usize,
    /// Row index in the input matrix.
    pub index: usize,
    pub label: String,
    /// Suitability in [0, 1].
    pub score: f64,
    pub distance_to_ideal: f64,
    pub distance_to_anti_ideal: f64,
}

impl RankedAlternative {
    /// Returns the score rounded for display. Never used for ordering.
    pub fn rounded_score(&self, decimals: u8) -> f64 {
        let factor = 10_f64.powi(i32::from(decimals));
        (self.score * factor).round() / factor
    }
}

/// Alternatives sorted from most to least suitable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub entries: Vec<RankedAlternative>,
    pub reference_points: ReferencePoints,
}

impl RankedResult {
    /// Returns true if nothing was ranked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of ranked alternatives.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the top-ranked alternative.
    pub fn best(&self) -> Option<&RankedAlternative> {
        self.entries.first()
    }

    /// Returns input indices in rank order.
    pub fn order(&self) -> Vec<usize> {
        self.entries.iter().map(|e| e.index).collect()
    }

    /// Returns scores indexed by input position.
    pub fn scores_by_index(&self) -> Vec<f64> {
        let mut scores = vec![0.0; self.entries.len()];
        for entry in &self.entries {
            scores[entry.index] = entry.score;
        }
        scores
    }

    /// Finds the entry for an input row.
    pub fn entry_for(&self, index: usize) -> Option<&RankedAlternative> {
        self.entries.iter().find(|e| e.index == index)
    }
}

/// Ideal-solution ranking with configurable tie tolerance and normalization.
///
/// The engine holds settings only; every call to [`RankingEngine::rank`] is
/// independent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingEngine {
    tie_tolerance: f64,
    normalization: NormalizationMethod,
}

impl RankingEngine {
    /// Creates an engine with explicit settings.
    pub fn new(tie_tolerance: f64, normalization: NormalizationMethod) -> Self {
        Self {
            tie_tolerance,
            normalization,
        }
    }

    /// Returns the relative tolerance used to detect tied scores.
    pub fn tie_tolerance(&self) -> f64 {
        self.tie_tolerance
    }

    /// Returns the column normalization in use.
    pub fn normalization(&self) -> NormalizationMethod {
        self.normalization
    }

    /// Scores and ranks every alternative.
    ///
    /// `types` holds raw direction entries (+1 benefit, -1 cost). Input is
    /// validated in full before any computation; on error nothing is scored.
    pub fn rank(
        &self,
        matrix: &DecisionMatrix,
        weights: &[f64],
        types: &[f64],
    ) -> Result<RankedResult, ValidationError> {
        let criterion_types = InputValidator::validate(matrix, weights, types).map_err(|err| {
            warn!(error = %err, "Rejected ranking input");
            err
        })?;

        debug!(
            alternatives = matrix.alternative_count(),
            criteria = criterion_types.len(),
            normalization = self.normalization.name(),
            "Ranking alternatives"
        );

        let normalized = CriterionNormalizer::normalize(matrix, self.normalization);
        let reference_points = IdealSolutionResolver::resolve(&normalized, &criterion_types);
        let scored = DistanceScorer::score(&normalized, &reference_points, weights);

        let scores: Vec<f64> = scored.iter().map(|s| s.score).collect();
        let order = Ranker::order(&scores, self.tie_tolerance);

        let entries: Vec<RankedAlternative> = order
            .into_iter()
            .enumerate()
            .map(|(position, index)| RankedAlternative {
                rank: position + 1,
                index,
                label: matrix.labels[index].clone(),
                score: scored[index].score,
                distance_to_ideal: scored[index].distance_to_ideal,
                distance_to_anti_ideal: scored[index].distance_to_anti_ideal,
            })
            .collect();

        if let Some(best) = entries.first() {
            debug!(best = %best.label, score = best.score, "Ranking complete");
        }

        Ok(RankedResult {
            entries,
            reference_points,
        })
    }
}

impl Default for RankingEngine {
    fn default() -> Self {
        Self::new(DEFAULT_TIE_TOLERANCE, NormalizationMethod::MinMax)
    }
}

/// Ranks alternatives with default settings (min-max normalization,
/// relative tie tolerance of 1e-9).
pub fn rank(
    matrix: &DecisionMatrix,
    weights: &[f64],
    types: &[f64],
) -> Result<RankedResult, ValidationError> {
    RankingEngine::default().rank(matrix, weights, types)
}
