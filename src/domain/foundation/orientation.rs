//! Criterion orientation: whether higher or lower raw values are preferred.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Direction in which a criterion's raw values improve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Orientation {
    /// Higher raw values are better; normalized as `raw / max`.
    Benefit,
    /// Lower raw values are better; normalized as `min / raw`.
    Cost,
}

impl Orientation {
    /// Parses an orientation label (`"benefit"` or `"cost"`, case-insensitive).
    pub fn try_from_label(label: &str) -> Result<Self, ValidationError> {
        match label.trim().to_ascii_lowercase().as_str() {
            "benefit" => Ok(Orientation::Benefit),
            "cost" => Ok(Orientation::Cost),
            other => Err(ValidationError::invalid_format(
                "orientation",
                format!("expected 'benefit' or 'cost', got '{}'", other),
            )),
        }
    }

    /// Returns the canonical lowercase label.
    pub fn label(&self) -> &'static str {
        match self {
            Orientation::Benefit => "benefit",
            Orientation::Cost => "cost",
        }
    }

    /// Returns true for benefit criteria.
    pub fn is_benefit(&self) -> bool {
        matches!(self, Orientation::Benefit)
    }

    /// Returns true for cost criteria.
    pub fn is_cost(&self) -> bool {
        matches!(self, Orientation::Cost)
    }
}

impl FromStr for Orientation {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_label(s)
    }
}

impl TryFrom<String> for Orientation {
    type Error = ValidationError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        Self::try_from_label(&label)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
