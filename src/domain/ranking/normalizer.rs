//! Criterion Normalizer - Rescales criterion columns onto a common range.

use serde::{Deserialize, Serialize};

use super::DecisionMatrix;

/// Value given to every cell of a column that carries no discriminating
/// information (zero range, or zero norm).
pub const NEUTRAL_VALUE: f64 = 0.5;

/// How raw criterion columns are rescaled.
///
/// Normalization never looks at preference direction; direction is applied
/// when reference points are resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMethod {
    /// `(v - min) / (max - min)`; 1 is always the largest raw value.
    #[default]
    MinMax,
    /// `v / sqrt(sum of v^2)` over the column.
    Vector,
}

impl NormalizationMethod {
    /// Returns the configuration name of this method.
    pub fn name(&self) -> &'static str {
        match self {
            NormalizationMethod::MinMax => "min_max",
            NormalizationMethod::Vector => "vector",
        }
    }
}

/// Decision matrix after per-column rescaling. Same shape as its source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedMatrix {
    pub rows: Vec<Vec<f64>>,
}

impl NormalizedMatrix {
    /// Returns the number of alternatives.
    pub fn alternative_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of criteria.
    pub fn criterion_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Collects column `j` across all alternatives.
    pub fn column(&self, j: usize) -> Vec<f64> {
        self.rows.iter().filter_map(|row| row.get(j).copied()).collect()
    }
}

/// Column rescaling functions.
pub struct CriterionNormalizer;

impl CriterionNormalizer {
    /// Normalizes every column of a validated matrix.
    ///
    /// # Edge Cases
    /// - Zero-range column (min-max): every value becomes [`NEUTRAL_VALUE`]
    /// - Zero-norm column (vector): every value becomes [`NEUTRAL_VALUE`]
    /// - Single alternative: every column has zero range
    pub fn normalize(matrix: &DecisionMatrix, method: NormalizationMethod) -> NormalizedMatrix {
        let columns = matrix.criterion_count();
        let mut rows: Vec<Vec<f64>> = matrix
            .rows
            .iter()
            .map(|row| Vec::with_capacity(row.len()))
            .collect();

        for j in 0..columns {
            let raw = matrix.column(j);
            let scaled = match method {
                NormalizationMethod::MinMax => Self::min_max(&raw),
                NormalizationMethod::Vector => Self::vector(&raw),
            };
            for (row, value) in rows.iter_mut().zip(scaled) {
                row.push(value);
            }
        }

        NormalizedMatrix { rows }
    }

    /// Min-max rescaling of one column onto [0, 1].
    ///
    /// Operands are halved before subtracting so that a column spanning the
    /// whole `f64` range still has a finite width. Halving is exact for
    /// normal values.
    pub fn min_max(column: &[f64]) -> Vec<f64> {
        let min = column.iter().copied().fold(f64::INFINITY, f64::min);
        let max = column.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        if max == min {
            return vec![NEUTRAL_VALUE; column.len()];
        }

        let half_min = min / 2.0;
        let half_range = max / 2.0 - half_min;
        column
            .iter()
            .map(|v| ((v / 2.0 - half_min) / half_range).clamp(0.0, 1.0))
            .collect()
    }

    /// Euclidean-norm rescaling of one column.
    ///
    /// The norm is taken over values divided by the largest magnitude, so
    /// squaring never overflows.
    pub fn vector(column: &[f64]) -> Vec<f64> {
        let largest = column.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));

        if largest == 0.0 {
            return vec![NEUTRAL_VALUE; column.len()];
        }

        let norm = largest
            * column
                .iter()
                .map(|v| (v / largest).powi(2))
                .sum::<f64>()
                .sqrt();
        column.iter().map(|v| v / norm).collect()
    }
}
