//! Alternative Store - Candidate options with one raw value per criterion.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use super::SawError;

/// Stable handle to an alternative: its insertion index in the store.
///
/// Handles stay valid for as long as the store only grows, which is the only
/// mutation the store supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlternativeHandle(usize);

impl AlternativeHandle {
    #[cfg(test)]
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for AlternativeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A candidate option. `raw_values[i]` is its value on criterion `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    name: String,
    raw_values: Vec<f64>,
}

impl Alternative {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn raw_values(&self) -> &[f64] {
        &self.raw_values
    }
}

/// Ordered list of alternatives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlternativeStore {
    alternatives: Vec<Alternative>,
}

impl AlternativeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an alternative and returns its handle.
    ///
    /// `expected_arity` is the current criterion count; the raw values must
    /// match it exactly.
    ///
    /// # Errors
    /// - `EmptyName` if `name` is blank
    /// - `ArityMismatch` if `raw_values.len() != expected_arity`
    pub fn add_alternative(
        &mut self,
        name: impl Into<String>,
        raw_values: Vec<f64>,
        expected_arity: usize,
    ) -> Result<AlternativeHandle, SawError> {
        let name = name.into();
        let index = self.alternatives.len();

        if name.trim().is_empty() {
            warn!(index, "Rejected alternative with empty name");
            return Err(SawError::EmptyName {
                kind: "alternative",
                index,
            });
        }

        if raw_values.len() != expected_arity {
            warn!(
                index,
                alternative = %name,
                expected = expected_arity,
                actual = raw_values.len(),
                "Rejected alternative with mismatched arity"
            );
            return Err(SawError::ArityMismatch {
                alternative_index: index,
                alternative: name,
                expected: expected_arity,
                actual: raw_values.len(),
            });
        }

        self.alternatives.push(Alternative { name, raw_values });
        Ok(AlternativeHandle(index))
    }

    /// All alternatives in insertion order.
    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    pub fn get(&self, handle: AlternativeHandle) -> Option<&Alternative> {
        self.alternatives.get(handle.0)
    }

    /// Handles of every stored alternative, in insertion order.
    pub fn handles(&self) -> impl Iterator<Item = AlternativeHandle> {
        (0..self.alternatives.len()).map(AlternativeHandle)
    }

    /// Pairs each alternative with its handle, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (AlternativeHandle, &Alternative)> {
        self.alternatives
            .iter()
            .enumerate()
            .map(|(i, alt)| (AlternativeHandle(i), alt))
    }

    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }
}
