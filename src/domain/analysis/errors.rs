//! Scoring-specific error types.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;

/// Which input collection was empty at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Criteria,
    Alternatives,
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputKind::Criteria => write!(f, "criteria"),
            InputKind::Alternatives => write!(f, "alternatives"),
        }
    }
}

/// Failures of the SAW pipeline.
///
/// Every variant names the index (0-based, insertion order) and the field at
/// fault so the caller can point the user at the offending input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SawError {
    #[error(
        "Alternative '{alternative}' (index {alternative_index}) has {actual} raw values, expected {expected}"
    )]
    ArityMismatch {
        alternative_index: usize,
        alternative: String,
        expected: usize,
        actual: usize,
    },

    #[error("Cannot evaluate without {missing}")]
    EmptyInput { missing: InputKind },

    #[error("Criterion at index {criterion_index} has invalid orientation '{label}'")]
    InvalidOrientation { criterion_index: usize, label: String },

    #[error("Criterion '{criterion}' (index {criterion_index}) has invalid weight {value}")]
    InvalidWeight {
        criterion_index: usize,
        criterion: String,
        value: f64,
    },

    #[error("Field 'name' of {kind} at index {index} cannot be empty")]
    EmptyName { kind: &'static str, index: usize },

    #[error(
        "Raw value {value} of alternative '{alternative}' (index {alternative_index}) for criterion '{criterion}' (index {criterion_index}) cannot be normalized; values must be finite and greater than zero"
    )]
    DegenerateNormalization {
        alternative_index: usize,
        alternative: String,
        criterion_index: usize,
        criterion: String,
        value: f64,
    },

    #[error(
        "Weighted score of alternative '{alternative}' (index {alternative_index}) is not finite; weights are too large"
    )]
    NonFiniteScore {
        alternative_index: usize,
        alternative: String,
    },
}

impl SawError {
    pub fn empty(missing: InputKind) -> Self {
        SawError::EmptyInput { missing }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SawError::ArityMismatch { .. } => ErrorCode::ArityMismatch,
            SawError::EmptyInput { .. } => ErrorCode::EmptyInput,
            SawError::InvalidOrientation { .. } => ErrorCode::InvalidOrientation,
            SawError::InvalidWeight { .. } => ErrorCode::InvalidWeight,
            SawError::EmptyName { .. } => ErrorCode::EmptyName,
            SawError::DegenerateNormalization { .. } => ErrorCode::DegenerateNormalization,
            SawError::NonFiniteScore { .. } => ErrorCode::NonFiniteScore,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_mismatch_names_alternative_and_counts() {
        let err = SawError::ArityMismatch {
            alternative_index: 2,
            alternative: "A3".to_string(),
            expected: 5,
            actual: 4,
        };
        assert_eq!(
            err.to_string(),
            "Alternative 'A3' (index 2) has 4 raw values, expected 5"
        );
        assert_eq!(err.code(), ErrorCode::ArityMismatch);
    }

    #[test]
    fn empty_input_names_missing_collection() {
        assert_eq!(
            SawError::empty(InputKind::Alternatives).to_string(),
            "Cannot evaluate without alternatives"
        );
        assert_eq!(
            SawError::empty(InputKind::Criteria).code(),
            ErrorCode::EmptyInput
        );
    }

    #[test]
    fn degenerate_normalization_names_both_indices() {
        let err = SawError::DegenerateNormalization {
            alternative_index: 1,
            alternative: "A2".to_string(),
            criterion_index: 0,
            criterion: "Price".to_string(),
            value: 0.0,
        };
        let message = err.to_string();
        assert!(message.contains("'A2' (index 1)"));
        assert!(message.contains("'Price' (index 0)"));
        assert_eq!(err.code(), ErrorCode::DegenerateNormalization);
    }

    #[test]
    fn codes_map_one_to_one() {
        let orientation = SawError::InvalidOrientation {
            criterion_index: 0,
            label: "neutral".to_string(),
        };
        let weight = SawError::InvalidWeight {
            criterion_index: 0,
            criterion: "Price".to_string(),
            value: -1.0,
        };
        let name = SawError::EmptyName {
            kind: "criterion",
            index: 3,
        };
        assert_eq!(orientation.code(), ErrorCode::InvalidOrientation);
        assert_eq!(weight.code(), ErrorCode::InvalidWeight);
        let overflow = SawError::NonFiniteScore {
            alternative_index: 0,
            alternative: "A1".to_string(),
        };
        assert_eq!(name.code(), ErrorCode::EmptyName);
        assert_eq!(overflow.code(), ErrorCode::NonFiniteScore);
        assert_eq!(
            name.to_string(),
            "Field 'name' of criterion at index 3 cannot be empty"
        );
    }
}
