//! Input Validator - Shape and value-domain checks for ranking input.

use crate::domain::foundation::{CriterionType, ValidationError};

use super::DecisionMatrix;

/// Validation of decision matrices, weight vectors and criterion types.
pub struct InputValidator;

impl InputValidator {
    /// Validates a complete ranking request.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// matrix shape and labels, weight length, type length, weight values,
    /// type values, then matrix cells.
    ///
    /// On success returns the typed criterion directions, one per column.
    pub fn validate(
        matrix: &DecisionMatrix,
        weights: &[f64],
        types: &[f64],
    ) -> Result<Vec<CriterionType>, ValidationError> {
        let columns = Self::check_shape(matrix)?;

        if weights.len() != columns {
            return Err(ValidationError::shape_mismatch("weights", columns, weights.len()));
        }
        if types.len() != columns {
            return Err(ValidationError::shape_mismatch("types", columns, types.len()));
        }

        Self::check_weights(weights)?;

        let criterion_types = types
            .iter()
            .enumerate()
            .map(|(index, &value)| CriterionType::try_from_f64(value, index))
            .collect::<Result<Vec<_>, _>>()?;

        Self::check_cells(matrix)?;

        Ok(criterion_types)
    }

    /// Validates the matrix on its own: shape, labels and finite cells.
    ///
    /// Used before deriving weights from the data.
    pub fn validate_matrix(matrix: &DecisionMatrix) -> Result<(), ValidationError> {
        Self::check_shape(matrix)?;
        Self::check_cells(matrix)
    }

    /// Returns the column count of a rectangular, labelled, non-empty matrix.
    fn check_shape(matrix: &DecisionMatrix) -> Result<usize, ValidationError> {
        let columns = matrix.criterion_count();
        if matrix.is_empty() || columns == 0 {
            return Err(ValidationError::EmptyMatrix);
        }

        for (row, values) in matrix.rows.iter().enumerate() {
            if values.len() != columns {
                return Err(ValidationError::shape_mismatch(
                    format!("rows[{}]", row),
                    columns,
                    values.len(),
                ));
            }
        }

        if matrix.labels.len() != matrix.alternative_count() {
            return Err(ValidationError::shape_mismatch(
                "labels",
                matrix.alternative_count(),
                matrix.labels.len(),
            ));
        }

        Ok(columns)
    }

    fn check_weights(weights: &[f64]) -> Result<(), ValidationError> {
        for (index, &weight) in weights.iter().enumerate() {
            if !weight.is_finite() {
                return Err(ValidationError::invalid_weight_at(
                    index,
                    format!("weight at index {} is not finite ({})", index, weight),
                ));
            }
            if weight < 0.0 {
                return Err(ValidationError::invalid_weight_at(
                    index,
                    format!("weight at index {} is negative ({})", index, weight),
                ));
            }
        }

        if weights.iter().all(|&w| w == 0.0) {
            return Err(ValidationError::all_weights_zero());
        }

        Ok(())
    }

    fn check_cells(matrix: &DecisionMatrix) -> Result<(), ValidationError> {
        for (row, values) in matrix.rows.iter().enumerate() {
            if let Some((column, &value)) =
                values.iter().enumerate().find(|(_, v)| !v.is_finite())
            {
                return Err(ValidationError::NonFiniteValue { row, column, value });
            }
        }
        Ok(())
    }
}
