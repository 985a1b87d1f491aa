//! Ranking Module - Pure domain services for ideal-solution ranking.
//!
//! Alternatives are ranked by their relative closeness to an ideal point and
//! distance from an anti-ideal point across weighted criteria.
//!
//! # Components
//!
//! - `DecisionMatrix` - Alternatives x criteria measurements with labels
//! - `InputValidator` - Shape and value-domain checks, the only failing stage
//! - `CriterionNormalizer` - Per-column rescaling (min-max or vector)
//! - `IdealSolutionResolver` - Ideal and anti-ideal reference points
//! - `DistanceScorer` - Weighted distances and suitability scores
//! - `Ranker` - Stable descending order with a relative tie tolerance
//! - `WeightingMethod` - Caller-given or data-derived criterion weights
//! - `RankingEngine` - The composed pipeline
//!
//! # Design Philosophy
//!
//! Every stage is a pure function of its inputs. Nothing is cached between
//! calls, so identical input always yields identical output and separate
//! calls can run on separate threads without coordination.

mod band;
mod decision_matrix;
mod distance_scorer;
mod engine;
mod ideal_solution;
mod normalizer;
mod ranker;
mod validator;
mod weighting;

// Re-export all public types
pub use band::{
    BandThresholds, SuitabilityBand, DEFAULT_MARGINAL_THRESHOLD, DEFAULT_SUITABLE_THRESHOLD,
};
pub use decision_matrix::{DecisionMatrix, DecisionMatrixBuilder};
pub use distance_scorer::{AlternativeScore, DistanceScorer};
pub use engine::{rank, RankedAlternative, RankedResult, RankingEngine};
pub use ideal_solution::{IdealSolutionResolver, ReferencePoints};
pub use normalizer::{CriterionNormalizer, NormalizationMethod, NormalizedMatrix, NEUTRAL_VALUE};
pub use ranker::{Ranker, DEFAULT_TIE_TOLERANCE};
pub use validator::InputValidator;
pub use weighting::WeightingMethod;
