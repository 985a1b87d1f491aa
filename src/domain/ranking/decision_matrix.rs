//! Decision Matrix - Alternatives scored against criteria.

use serde::{Deserialize, Serialize};

/// Alternatives x criteria measurements, row-major.
///
/// Row `i` holds the measurements of alternative `i`; column `j` is
/// criterion `j`. The matrix is not checked on construction: callers build it
/// from untrusted tabular input and the validator reports any defect with its
/// position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionMatrix {
    /// Identity of each alternative, in row order.
    pub labels: Vec<String>,
    /// Criterion measurements per alternative.
    pub rows: Vec<Vec<f64>>,
}

impl DecisionMatrix {
    /// Creates a matrix with generated labels `A1..An`.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let labels = (1..=rows.len()).map(default_label).collect();
        Self { labels, rows }
    }

    /// Creates a builder for constructing a decision matrix.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::new()
    }

    /// Returns true if the matrix has no alternatives.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of alternatives.
    pub fn alternative_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of criteria, taken from the first row.
    pub fn criterion_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Returns the measurements of one alternative.
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Returns the label of one alternative.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Collects column `j` across all alternatives.
    ///
    /// Rows shorter than `j` are skipped; validated matrices have none.
    pub fn column(&self, j: usize) -> Vec<f64> {
        self.rows.iter().filter_map(|row| row.get(j).copied()).collect()
    }
}

fn default_label(position: usize) -> String {
    format!("A{}", position)
}

/// Builder for constructing DecisionMatrix instances.
#[derive(Debug, Default)]
pub struct DecisionMatrixBuilder {
    labels: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl DecisionMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a labelled alternative.
    pub fn alternative(mut self, label: impl Into<String>, values: Vec<f64>) -> Self {
        self.labels.push(label.into());
        self.rows.push(values);
        self
    }

    /// Adds an alternative labelled by its 1-based position.
    pub fn row(mut self, values: Vec<f64>) -> Self {
        self.labels.push(default_label(self.rows.len() + 1));
        self.rows.push(values);
        self
    }

    /// Builds the decision matrix.
    pub fn build(self) -> DecisionMatrix {
        DecisionMatrix {
            labels: self.labels,
            rows: self.rows,
        }
    }
}
