//! Weighting - Criterion weights supplied by the caller or derived from data.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::{DecisionMatrix, InputValidator};

/// Where criterion weights come from.
///
/// Objective methods derive weights from the spread of each column; the more
/// a criterion separates alternatives, the more weight it receives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightingMethod {
    /// Caller-supplied weights, used verbatim.
    #[default]
    Given,
    /// `1/m` for every criterion.
    Equal,
    /// Shannon entropy of each column's share distribution.
    Entropy,
    /// Population standard deviation of each column.
    StandardDeviation,
    /// Gini mean difference of each column relative to its mean.
    Gini,
}

impl WeightingMethod {
    /// Returns the configuration name of this method.
    pub fn name(&self) -> &'static str {
        match self {
            WeightingMethod::Given => "given",
            WeightingMethod::Equal => "equal",
            WeightingMethod::Entropy => "entropy",
            WeightingMethod::StandardDeviation => "standard_deviation",
            WeightingMethod::Gini => "gini",
        }
    }

    /// Returns true if weights are computed from the matrix.
    pub fn is_derived(&self) -> bool {
        !matches!(self, WeightingMethod::Given)
    }

    /// Produces the weight vector for a matrix.
    ///
    /// `Given` returns `given` unchanged; its values are checked later with
    /// the rest of the ranking input. Derived methods validate the matrix
    /// first and ignore `given`.
    ///
    /// # Edge Cases
    /// - Every column constant: derived weights are all zero, which ranking
    ///   rejects as `InvalidWeight`
    /// - Entropy or Gini with a negative cell: `NegativeValue`
    pub fn resolve(
        &self,
        matrix: &DecisionMatrix,
        given: &[f64],
    ) -> Result<Vec<f64>, ValidationError> {
        if !self.is_derived() {
            return Ok(given.to_vec());
        }

        InputValidator::validate_matrix(matrix)?;
        let columns: Vec<Vec<f64>> = (0..matrix.criterion_count())
            .map(|j| matrix.column(j))
            .collect();

        let raw = match self {
            WeightingMethod::Given | WeightingMethod::Equal => vec![1.0; columns.len()],
            WeightingMethod::Entropy => {
                self.check_non_negative(matrix)?;
                columns.iter().map(|c| 1.0 - Self::entropy(c)).collect()
            }
            WeightingMethod::StandardDeviation => {
                columns.iter().map(|c| Self::standard_deviation(c)).collect()
            }
            WeightingMethod::Gini => {
                self.check_non_negative(matrix)?;
                columns.iter().map(|c| Self::gini(c)).collect()
            }
        };

        Ok(Self::to_shares(raw))
    }

    /// Scales weights to sum to 1, leaving an all-zero vector untouched.
    fn to_shares(raw: Vec<f64>) -> Vec<f64> {
        let total: f64 = raw.iter().sum();
        if total == 0.0 {
            return raw;
        }
        raw.into_iter().map(|w| w / total).collect()
    }

    /// Share-based methods are only meaningful on non-negative columns.
    fn check_non_negative(&self, matrix: &DecisionMatrix) -> Result<(), ValidationError> {
        for (row, values) in matrix.rows.iter().enumerate() {
            if let Some((column, &value)) = values.iter().enumerate().find(|(_, v)| **v < 0.0) {
                return Err(ValidationError::NegativeValue {
                    row,
                    column,
                    value,
                    method: self.name(),
                });
            }
        }
        Ok(())
    }

    /// Normalized entropy in [0, 1]; 1 means the column carries no information.
    fn entropy(column: &[f64]) -> f64 {
        let n = column.len();
        let total: f64 = column.iter().sum();
        if n < 2 || total == 0.0 {
            return 1.0;
        }

        let sum: f64 = column
            .iter()
            .map(|v| v / total)
            .filter(|p| *p > 0.0)
            .map(|p| p * p.ln())
            .sum();

        // Clamp rounding noise for uniform columns.
        (-sum / (n as f64).ln()).clamp(0.0, 1.0)
    }

    fn standard_deviation(column: &[f64]) -> f64 {
        let n = column.len() as f64;
        let mean = column.iter().sum::<f64>() / n;
        let variance = column.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        variance.sqrt()
    }

    fn gini(column: &[f64]) -> f64 {
        let n = column.len() as f64;
        let mean = column.iter().sum::<f64>() / n;
        if mean == 0.0 {
            return 0.0;
        }

        let mean_difference: f64 = column
            .iter()
            .map(|a| column.iter().map(|b| (a - b).abs()).sum::<f64>())
            .sum();

        mean_difference / (2.0 * n * n * mean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn matrix() -> DecisionMatrix {
        DecisionMatrix::from_rows(vec![
            vec![1.0, 10.0, 5.0],
            vec![2.0, 10.0, 1.0],
            vec![3.0, 10.0, 9.0],
        ])
    }

    #[test]
    fn given_weights_pass_through_unchanged() {
        let weights = WeightingMethod::Given.resolve(&matrix(), &[0.2, 0.0, 7.0]).unwrap();
        assert_eq!(weights, vec![0.2, 0.0, 7.0]);
    }

    #[test]
    fn equal_weights_split_evenly() {
        let weights = WeightingMethod::Equal.resolve(&matrix(), &[]).unwrap();
        assert_eq!(weights.len(), 3);
        assert!(weights.iter().all(|w| approx(*w, 1.0 / 3.0)));
    }

    #[test]
    fn derived_weights_ignore_constant_columns() {
        for method in [
            WeightingMethod::Entropy,
            WeightingMethod::StandardDeviation,
            WeightingMethod::Gini,
        ] {
            let weights = method.resolve(&matrix(), &[]).unwrap();
            assert!(approx(weights[1], 0.0), "{} gave {:?}", method.name(), weights);
            assert!(approx(weights.iter().sum::<f64>(), 1.0));
        }
    }

    #[test]
    fn standard_deviation_favors_wider_spread() {
        // Column 0 std = sqrt(2/3), column 2 std = sqrt(32/3); ratio 1:4.
        let weights = WeightingMethod::StandardDeviation.resolve(&matrix(), &[]).unwrap();
        assert!(approx(weights[0], 0.2));
        assert!(approx(weights[2], 0.8));
    }

    #[test]
    fn gini_of_single_column() {
        // |1-2|+|1-3|+|2-3| counted twice = 8; 8 / (2 * 9 * 2) = 2/9
        assert!(approx(WeightingMethod::gini(&[1.0, 2.0, 3.0]), 2.0 / 9.0));
    }

    #[test]
    fn entropy_of_uniform_column_is_one() {
        assert!(approx(WeightingMethod::entropy(&[4.0, 4.0, 4.0, 4.0]), 1.0));
        assert!(WeightingMethod::entropy(&[1.0, 0.0, 0.0]) < 1e-12);
    }

    #[test]
    fn all_constant_matrix_yields_zero_weights() {
        let constant = DecisionMatrix::from_rows(vec![vec![2.0, 3.0], vec![2.0, 3.0]]);
        let weights = WeightingMethod::StandardDeviation.resolve(&constant, &[]).unwrap();
        assert_eq!(weights, vec![0.0, 0.0]);
    }

    #[test]
    fn entropy_rejects_negative_values() {
        let negative = DecisionMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, -4.0]]);
        match WeightingMethod::Entropy.resolve(&negative, &[]) {
            Err(ValidationError::NegativeValue { row, column, .. }) => {
                assert_eq!((row, column), (1, 1));
            }
            other => panic!("Expected NegativeValue, got {:?}", other),
        }
    }

    #[test]
    fn gini_rejects_negative_values() {
        let mixed = DecisionMatrix::from_rows(vec![
            vec![1.0, -1.0],
            vec![3.0, -5.0],
            vec![2.0, -3.0],
        ]);
        match WeightingMethod::Gini.resolve(&mixed, &[]) {
            Err(ValidationError::NegativeValue { row, column, method, .. }) => {
                assert_eq!((row, column), (0, 1));
                assert_eq!(method, "gini");
            }
            other => panic!("Expected NegativeValue, got {:?}", other),
        }
    }

    #[test]
    fn standard_deviation_accepts_negative_values() {
        let negative = DecisionMatrix::from_rows(vec![vec![-1.0, 2.0], vec![-3.0, 4.0]]);
        let weights = WeightingMethod::StandardDeviation.resolve(&negative, &[]).unwrap();
        assert!(weights.iter().all(|w| *w >= 0.0));
        assert!(approx(weights.iter().sum::<f64>(), 1.0));
    }

    #[test]
    fn derived_weights_validate_matrix_first() {
        let bad = DecisionMatrix::from_rows(vec![vec![1.0, f64::NAN]]);
        assert!(matches!(
            WeightingMethod::Gini.resolve(&bad, &[]),
            Err(ValidationError::NonFiniteValue { .. })
        ));
        assert_eq!(
            WeightingMethod::Equal.resolve(&DecisionMatrix::default(), &[]),
            Err(ValidationError::EmptyMatrix)
        );
    }

    #[test]
    fn method_names_match_serde() {
        let method: WeightingMethod = serde_json::from_str("\"standard_deviation\"").unwrap();
        assert_eq!(method, WeightingMethod::StandardDeviation);
        assert_eq!(serde_json::to_string(&WeightingMethod::Gini).unwrap(), "\"gini\"");
    }
}
