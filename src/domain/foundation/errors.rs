//! Error types shared by the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must be {constraint}, got {actual}")]
    OutOfRange {
        field: String,
        constraint: String,
        actual: f64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, constraint: impl Into<String>, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            constraint: constraint.into(),
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Stable error codes for every failure the scoring pipeline can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input shape
    ArityMismatch,
    EmptyInput,
    EmptyName,

    // Field values
    InvalidOrientation,
    InvalidWeight,
    DegenerateNormalization,
    NonFiniteScore,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ArityMismatch => "ARITY_MISMATCH",
            ErrorCode::EmptyInput => "EMPTY_INPUT",
            ErrorCode::EmptyName => "EMPTY_NAME",
            ErrorCode::InvalidOrientation => "INVALID_ORIENTATION",
            ErrorCode::InvalidWeight => "INVALID_WEIGHT",
            ErrorCode::DegenerateNormalization => "DEGENERATE_NORMALIZATION",
            ErrorCode::NonFiniteScore => "NON_FINITE_SCORE",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("weight", "a finite, non-negative number", -1.5);
        assert_eq!(
            format!("{}", err),
            "Field 'weight' must be a finite, non-negative number, got -1.5"
        );
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("orientation", "expected 'benefit' or 'cost'");
        assert_eq!(
            format!("{}", err),
            "Field 'orientation' has invalid format: expected 'benefit' or 'cost'"
        );
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::ArityMismatch), "ARITY_MISMATCH");
        assert_eq!(
            format!("{}", ErrorCode::DegenerateNormalization),
            "DEGENERATE_NORMALIZATION"
        );
        assert_eq!(format!("{}", ErrorCode::EmptyInput), "EMPTY_INPUT");
    }
}
