//! Criterion type value object: preference direction of a criterion.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Whether more or less of a criterion is preferred.
///
/// Encoded on the wire as `+1` (benefit) and `-1` (cost).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
#[repr(i8)]
pub enum CriterionType {
    Cost = -1,
    Benefit = 1,
}

impl CriterionType {
    /// Converts a raw type entry, accepting exactly `1.0` or `-1.0`.
    ///
    /// `index` is the criterion position, reported back on failure.
    pub fn try_from_f64(value: f64, index: usize) -> Result<Self, ValidationError> {
        if value == 1.0 {
            Ok(CriterionType::Benefit)
        } else if value == -1.0 {
            Ok(CriterionType::Cost)
        } else {
            Err(ValidationError::InvalidType { index, value })
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> i8 {
        *self as i8
    }

    /// Returns true if larger raw values are preferred.
    pub fn is_benefit(&self) -> bool {
        matches!(self, CriterionType::Benefit)
    }
}

impl TryFrom<i8> for CriterionType {
    type Error = ValidationError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Self::try_from_f64(f64::from(value), 0)
    }
}

impl From<CriterionType> for i8 {
    fn from(value: CriterionType) -> Self {
        value.value()
    }
}

impl fmt::Display for CriterionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.value() > 0 { "+" } else { "" };
        write!(f, "{}{}", sign, self.value())
    }
}
