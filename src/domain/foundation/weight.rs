//! Criterion weight value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Relative importance of a criterion: a finite, non-negative number.
///
/// Weights are used as given; they are not required to sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Weight(f64);

impl Weight {
    /// Zero weight: the criterion takes part in normalization but not in the score.
    pub const ZERO: Self = Self(0.0);

    /// Creates a Weight, returning error if negative or not finite.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || value < 0.0 {
            return Err(ValidationError::out_of_range(
                "weight",
                "a finite, non-negative number",
                value,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns true if the weight is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<f64> for Weight {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Weight> for f64 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_try_new_accepts_valid_values() {
        assert_eq!(Weight::try_new(0.0).unwrap().value(), 0.0);
        assert_eq!(Weight::try_new(5.0).unwrap().value(), 5.0);
        assert_eq!(Weight::try_new(0.25).unwrap().value(), 0.25);
    }

    #[test]
    fn weight_try_new_rejects_negative() {
        match Weight::try_new(-1.0) {
            Err(ValidationError::OutOfRange { field, actual, .. }) => {
                assert_eq!(field, "weight");
                assert_eq!(actual, -1.0);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn weight_try_new_rejects_non_finite() {
        assert!(Weight::try_new(f64::NAN).is_err());
        assert!(Weight::try_new(f64::INFINITY).is_err());
        assert!(Weight::try_new(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn weight_is_zero_works() {
        assert!(Weight::ZERO.is_zero());
        assert!(Weight::default().is_zero());
        assert!(!Weight::try_new(1.0).unwrap().is_zero());
    }

    #[test]
    fn weight_serializes_as_number() {
        let weight = Weight::try_new(3.0).unwrap();
        assert_eq!(serde_json::to_string(&weight).unwrap(), "3.0");
    }

    #[test]
    fn weight_deserialize_validates() {
        let weight: Weight = serde_json::from_str("4").unwrap();
        assert_eq!(weight.value(), 4.0);
        assert!(serde_json::from_str::<Weight>("-2").is_err());
    }
}
