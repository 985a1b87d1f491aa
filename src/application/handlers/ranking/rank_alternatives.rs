//! RankAlternativesHandler - Command handler for ranking a decision matrix.
//!
//! Resolves criterion weights, runs the ranking engine and classifies each
//! alternative into a suitability band for display.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::domain::foundation::DomainError;
use crate::domain::ranking::{
    BandThresholds, DecisionMatrix, RankedAlternative, RankingEngine, ReferencePoints,
    SuitabilityBand, WeightingMethod,
};

/// Command to rank the alternatives of a decision matrix.
#[derive(Debug, Clone)]
pub struct RankAlternativesCommand {
    /// The alternatives and their criterion measurements.
    pub matrix: DecisionMatrix,
    /// Caller-supplied weights, used when weighting is `Given`.
    pub weights: Vec<f64>,
    /// Raw criterion directions (+1 benefit, -1 cost).
    pub types: Vec<f64>,
    /// Weighting to apply; the handler's default when `None`.
    pub weighting: Option<WeightingMethod>,
}

/// A ranked alternative prepared for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandedAlternative {
    #[serde(flatten)]
    pub entry: RankedAlternative,
    /// Score rounded to the configured number of decimals.
    pub display_score: f64,
    pub band: SuitabilityBand,
}

/// Result of a successful ranking command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankAlternativesResult {
    /// The weighting that produced `weights`.
    pub weighting: WeightingMethod,
    /// The weight vector the engine actually used.
    pub weights: Vec<f64>,
    /// Alternatives from most to least suitable.
    pub alternatives: Vec<BandedAlternative>,
    /// Ideal and anti-ideal points the scores were measured against.
    pub reference_points: ReferencePoints,
}

impl RankAlternativesResult {
    /// Returns the alternatives that fall into a band.
    pub fn in_band(&self, band: SuitabilityBand) -> Vec<&BandedAlternative> {
        self.alternatives.iter().filter(|a| a.band == band).collect()
    }

    /// Returns the most suitable alternative.
    pub fn best(&self) -> Option<&BandedAlternative> {
        self.alternatives.first()
    }
}

/// Handler for ranking decision matrices.
///
/// Holds settings only; concurrent calls share nothing mutable.
#[derive(Debug, Clone)]
pub struct RankAlternativesHandler {
    engine: RankingEngine,
    default_weighting: WeightingMethod,
    decimals: u8,
    thresholds: BandThresholds,
}

impl RankAlternativesHandler {
    pub fn new(
        engine: RankingEngine,
        default_weighting: WeightingMethod,
        decimals: u8,
        thresholds: BandThresholds,
    ) -> Self {
        Self {
            engine,
            default_weighting,
            decimals,
            thresholds,
        }
    }

    /// Creates a handler from validated application configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.engine.build_engine(),
            config.engine.weighting,
            config.presentation.decimals,
            config.presentation.thresholds(),
        )
    }

    pub fn handle(
        &self,
        cmd: RankAlternativesCommand,
    ) -> Result<RankAlternativesResult, DomainError> {
        let weighting = cmd.weighting.unwrap_or(self.default_weighting);

        let weights = weighting.resolve(&cmd.matrix, &cmd.weights)?;
        if weighting.is_derived() {
            debug!(
                weighting = weighting.name(),
                weights = ?weights,
                "Derived criterion weights"
            );
        }

        let ranking = self.engine.rank(&cmd.matrix, &weights, &cmd.types)?;

        let alternatives: Vec<BandedAlternative> = ranking
            .entries
            .into_iter()
            .map(|entry| BandedAlternative {
                display_score: entry.rounded_score(self.decimals),
                band: self.thresholds.classify(entry.score),
                entry,
            })
            .collect();

        info!(
            alternatives = alternatives.len(),
            weighting = weighting.name(),
            suitable = alternatives
                .iter()
                .filter(|a| a.band == SuitabilityBand::Suitable)
                .count(),
            "Ranked alternatives"
        );

        Ok(RankAlternativesResult {
            weighting,
            weights,
            alternatives,
            reference_points: ranking.reference_points,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn handler() -> RankAlternativesHandler {
        RankAlternativesHandler::from_config(&AppConfig::default())
    }

    fn reservoirs() -> DecisionMatrix {
        DecisionMatrix::builder()
            .alternative("North", vec![10.0, 100.0])
            .alternative("South", vec![20.0, 50.0])
            .alternative("East", vec![15.0, 75.0])
            .build()
    }

    fn command(weights: Vec<f64>, weighting: Option<WeightingMethod>) -> RankAlternativesCommand {
        RankAlternativesCommand {
            matrix: reservoirs(),
            weights,
            types: vec![1.0, -1.0],
            weighting,
        }
    }

    #[test]
    fn ranks_and_bands_given_weights() {
        let result = handler().handle(command(vec![0.5, 0.5], None)).unwrap();

        assert_eq!(result.weighting, WeightingMethod::Given);
        assert_eq!(result.weights, vec![0.5, 0.5]);

        let labels: Vec<&str> = result
            .alternatives
            .iter()
            .map(|a| a.entry.label.as_str())
            .collect();
        assert_eq!(labels, vec!["South", "East", "North"]);

        let bands: Vec<SuitabilityBand> = result.alternatives.iter().map(|a| a.band).collect();
        assert_eq!(
            bands,
            vec![
                SuitabilityBand::Suitable,
                SuitabilityBand::Marginal,
                SuitabilityBand::Unsuitable
            ]
        );
        assert_eq!(result.in_band(SuitabilityBand::Suitable).len(), 1);
    }

    #[test]
    fn display_score_is_rounded() {
        let result = handler().handle(command(vec![0.5, 0.5], None)).unwrap();
        for alternative in &result.alternatives {
            let scaled = alternative.display_score * 1000.0;
            assert!((scaled - scaled.round()).abs() < 1e-6);
        }
    }

    #[test]
    fn derived_weighting_replaces_caller_weights() {
        let result = handler()
            .handle(command(Vec::new(), Some(WeightingMethod::Equal)))
            .unwrap();

        assert_eq!(result.weighting, WeightingMethod::Equal);
        assert_eq!(result.weights, vec![0.5, 0.5]);
        assert_eq!(result.best().unwrap().entry.label, "South");
    }

    #[test]
    fn handler_default_weighting_applies_when_unset() {
        let handler = RankAlternativesHandler::new(
            RankingEngine::default(),
            WeightingMethod::StandardDeviation,
            3,
            BandThresholds::default(),
        );
        let result = handler.handle(command(Vec::new(), None)).unwrap();
        assert_eq!(result.weighting, WeightingMethod::StandardDeviation);
        assert!((result.weights.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn validation_failure_maps_to_domain_error() {
        let err = handler()
            .handle(command(vec![0.5, 0.5, 0.1], None))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ShapeMismatch);
        assert_eq!(err.details.get("field"), Some(&"weights".to_string()));
    }

    #[test]
    fn zero_derived_weights_are_rejected() {
        let cmd = RankAlternativesCommand {
            matrix: DecisionMatrix::from_rows(vec![vec![1.0, 2.0], vec![1.0, 2.0]]),
            weights: Vec::new(),
            types: vec![1.0, 1.0],
            weighting: Some(WeightingMethod::Gini),
        };
        let err = handler().handle(cmd).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidWeight);
    }

    #[test]
    fn result_serializes_flattened_entries() {
        let result = handler().handle(command(vec![0.5, 0.5], None)).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        let first = &json["alternatives"][0];
        assert_eq!(first["label"], "South");
        assert_eq!(first["rank"], 1);
        assert_eq!(first["band"], "suitable");
    }

    #[test]
    fn result_serializes_each_alternative_once() {
        let result = handler().handle(command(vec![0.5, 0.5], None)).unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert!(json.get("ranking").is_none());
        assert_eq!(json["alternatives"].as_array().unwrap().len(), 3);
        assert_eq!(json["reference_points"]["ideal"], serde_json::json!([1.0, 0.0]));
        assert_eq!(
            json["reference_points"]["anti_ideal"],
            serde_json::json!([0.0, 1.0])
        );
    }
}
