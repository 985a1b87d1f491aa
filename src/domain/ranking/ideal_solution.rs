//! Ideal Solution Resolver - Best and worst reference points per criterion.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::CriterionType;

use super::NormalizedMatrix;

/// The most preferred and least preferred value of each criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoints {
    /// Most preferred normalized value per criterion.
    pub ideal: Vec<f64>,
    /// Least preferred normalized value per criterion.
    pub anti_ideal: Vec<f64>,
}

/// Reference point derivation.
pub struct IdealSolutionResolver;

impl IdealSolutionResolver {
    /// Resolves ideal and anti-ideal vectors.
    ///
    /// Benefit criteria take the column maximum as ideal and the minimum as
    /// anti-ideal; cost criteria take the reverse. `types` must have one entry
    /// per column.
    pub fn resolve(normalized: &NormalizedMatrix, types: &[CriterionType]) -> ReferencePoints {
        let mut ideal = Vec::with_capacity(types.len());
        let mut anti_ideal = Vec::with_capacity(types.len());

        for (j, criterion_type) in types.iter().enumerate() {
            let column = normalized.column(j);
            let min = column.iter().copied().fold(f64::INFINITY, f64::min);
            let max = column.iter().copied().fold(f64::NEG_INFINITY, f64::max);

            let (best, worst) = if criterion_type.is_benefit() {
                (max, min)
            } else {
                (min, max)
            };
            ideal.push(best);
            anti_ideal.push(worst);
        }

        ReferencePoints { ideal, anti_ideal }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized() -> NormalizedMatrix {
        NormalizedMatrix {
            rows: vec![vec![0.0, 1.0, 0.5], vec![1.0, 0.0, 0.5], vec![0.5, 0.5, 0.5]],
        }
    }

    #[test]
    fn benefit_prefers_maximum() {
        let points = IdealSolutionResolver::resolve(
            &normalized(),
            &[CriterionType::Benefit, CriterionType::Benefit, CriterionType::Benefit],
        );
        assert_eq!(points.ideal, vec![1.0, 1.0, 0.5]);
        assert_eq!(points.anti_ideal, vec![0.0, 0.0, 0.5]);
    }

    #[test]
    fn cost_prefers_minimum() {
        let points = IdealSolutionResolver::resolve(
            &normalized(),
            &[CriterionType::Benefit, CriterionType::Cost, CriterionType::Cost],
        );
        assert_eq!(points.ideal, vec![1.0, 0.0, 0.5]);
        assert_eq!(points.anti_ideal, vec![0.0, 1.0, 0.5]);
    }

    #[test]
    fn constant_column_collapses_reference_points() {
        let points = IdealSolutionResolver::resolve(
            &normalized(),
            &[CriterionType::Cost, CriterionType::Cost, CriterionType::Benefit],
        );
        assert_eq!(points.ideal[2], points.anti_ideal[2]);
    }
}
