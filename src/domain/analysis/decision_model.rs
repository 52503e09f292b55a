//! Decision Model - Owns the criterion registry and alternative store for one run.

use super::{
    AlternativeHandle, AlternativeStore, CriterionRegistry, Evaluation, SawError, SawEvaluator,
};
use crate::domain::foundation::Orientation;
use crate::ports::ScoreSink;

/// A SAW decision: criteria first, then alternatives, then `evaluate`.
///
/// Not synchronized. Callers sharing one model across threads must
/// serialize access themselves.
#[derive(Debug, Clone, Default)]
pub struct SawModel {
    criteria: CriterionRegistry,
    alternatives: AlternativeStore,
}

impl SawModel {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a criterion; see [`CriterionRegistry::add_criterion`].
    pub fn add_criterion(
        &mut self,
        name: impl Into<String>,
        weight: f64,
        orientation: Orientation,
    ) -> Result<usize, SawError> {
        self.criteria.add_criterion(name, weight, orientation)
    }

    /// Appends a criterion with a text orientation label.
    pub fn add_criterion_labeled(
        &mut self,
        name: impl Into<String>,
        weight: f64,
        orientation: &str,
    ) -> Result<usize, SawError> {
        self.criteria.add_criterion_labeled(name, weight, orientation)
    }

    /// Appends an alternative, checking its arity against the criteria
    /// registered so far.
    pub fn add_alternative(
        &mut self,
        name: impl Into<String>,
        raw_values: Vec<f64>,
    ) -> Result<AlternativeHandle, SawError> {
        self.alternatives
            .add_alternative(name, raw_values, self.criteria.len())
    }

    pub fn criteria(&self) -> &CriterionRegistry {
        &self.criteria
    }

    pub fn alternatives(&self) -> &AlternativeStore {
        &self.alternatives
    }

    /// Runs the SAW pipeline over the current contents.
    pub fn evaluate(&self) -> Result<Evaluation, SawError> {
        SawEvaluator::evaluate(&self.criteria, &self.alternatives)
    }

    /// Runs the pipeline and hands every score to `sink` in store order.
    ///
    /// The sink sees nothing unless the whole evaluation succeeds.
    pub fn evaluate_with(&self, sink: &mut dyn ScoreSink) -> Result<Evaluation, SawError> {
        let evaluation = self.evaluate()?;
        for score in evaluation.scores() {
            sink.record(score);
        }
        Ok(evaluation)
    }
}
