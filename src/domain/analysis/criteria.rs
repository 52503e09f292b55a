//! Criterion Registry - Ordered, weighted axes of comparison.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::SawError;
use crate::domain::foundation::{Orientation, Weight};

/// A named, weighted axis of comparison with a benefit/cost orientation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    name: String,
    weight: Weight,
    orientation: Orientation,
}

impl Criterion {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

/// Ordered list of criteria. Index `i` lines up with index `i` of every
/// alternative's raw values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CriterionRegistry {
    criteria: Vec<Criterion>,
}

impl CriterionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a criterion and returns its index.
    ///
    /// # Errors
    /// - `EmptyName` if `name` is blank
    /// - `InvalidWeight` if `weight` is negative or not finite
    pub fn add_criterion(
        &mut self,
        name: impl Into<String>,
        weight: f64,
        orientation: Orientation,
    ) -> Result<usize, SawError> {
        let name = name.into();
        let index = self.criteria.len();

        if name.trim().is_empty() {
            warn!(index, "Rejected criterion with empty name");
            return Err(SawError::EmptyName {
                kind: "criterion",
                index,
            });
        }

        let weight = Weight::try_new(weight).map_err(|_| {
            warn!(index, criterion = %name, weight, "Rejected criterion weight");
            SawError::InvalidWeight {
                criterion_index: index,
                criterion: name.clone(),
                value: weight,
            }
        })?;

        self.criteria.push(Criterion {
            name,
            weight,
            orientation,
        });
        Ok(index)
    }

    /// Appends a criterion whose orientation is given as a text label.
    ///
    /// # Errors
    /// `InvalidOrientation` if the label is neither `benefit` nor `cost`, plus
    /// everything [`CriterionRegistry::add_criterion`] rejects.
    pub fn add_criterion_labeled(
        &mut self,
        name: impl Into<String>,
        weight: f64,
        orientation: &str,
    ) -> Result<usize, SawError> {
        let parsed = Orientation::try_from_label(orientation).map_err(|_| {
            warn!(index = self.criteria.len(), label = orientation, "Rejected criterion orientation");
            SawError::InvalidOrientation {
                criterion_index: self.criteria.len(),
                label: orientation.to_string(),
            }
        })?;
        self.add_criterion(name, weight, parsed)
    }

    /// All criteria in insertion order.
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn get(&self, index: usize) -> Option<&Criterion> {
        self.criteria.get(index)
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Sum of all weights; the upper bound of any alternative's score.
    pub fn total_weight(&self) -> f64 {
        self.criteria.iter().map(|c| c.weight.value()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_criterion_appends_in_order() {
        let mut registry = CriterionRegistry::new();
        assert_eq!(registry.add_criterion("Price", 5.0, Orientation::Cost).unwrap(), 0);
        assert_eq!(registry.add_criterion("Quality", 4.0, Orientation::Benefit).unwrap(), 1);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.criteria()[0].name(), "Price");
        assert_eq!(registry.criteria()[1].orientation(), Orientation::Benefit);
        assert_eq!(registry.get(1).unwrap().weight().value(), 4.0);
        assert!(registry.get(2).is_none());
    }

    #[test]
    fn empty_registry_reports_empty() {
        let registry = CriterionRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.total_weight(), 0.0);
    }

    #[test]
    fn total_weight_sums_unnormalized_weights() {
        let mut registry = CriterionRegistry::new();
        registry.add_criterion("A", 5.0, Orientation::Cost).unwrap();
        registry.add_criterion("B", 2.5, Orientation::Benefit).unwrap();
        assert_eq!(registry.total_weight(), 7.5);
    }

    #[test]
    fn add_criterion_rejects_negative_weight() {
        let mut registry = CriterionRegistry::new();
        registry.add_criterion("A", 1.0, Orientation::Cost).unwrap();

        let err = registry.add_criterion("B", -2.0, Orientation::Benefit).unwrap_err();
        assert_eq!(
            err,
            SawError::InvalidWeight {
                criterion_index: 1,
                criterion: "B".to_string(),
                value: -2.0,
            }
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn add_criterion_rejects_blank_name() {
        let mut registry = CriterionRegistry::new();
        let err = registry.add_criterion("  ", 1.0, Orientation::Cost).unwrap_err();
        assert_eq!(
            err,
            SawError::EmptyName {
                kind: "criterion",
                index: 0
            }
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn add_criterion_labeled_parses_orientation() {
        let mut registry = CriterionRegistry::new();
        registry.add_criterion_labeled("Logros", 5.0, "cost").unwrap();
        registry.add_criterion_labeled("Ambiente", 4.0, "benefit").unwrap();

        assert_eq!(registry.criteria()[0].orientation(), Orientation::Cost);
        assert_eq!(registry.criteria()[1].orientation(), Orientation::Benefit);
    }

    #[test]
    fn add_criterion_labeled_rejects_unknown_orientation() {
        let mut registry = CriterionRegistry::new();
        registry.add_criterion_labeled("Logros", 5.0, "cost").unwrap();

        let err = registry
            .add_criterion_labeled("Ambiente", 4.0, "benefits")
            .unwrap_err();
        assert_eq!(
            err,
            SawError::InvalidOrientation {
                criterion_index: 1,
                label: "benefits".to_string(),
            }
        );
        assert_eq!(registry.len(), 1);
    }
}
