//! EvaluateDecisionHandler - Builds a SAW model from caller input, evaluates
//! it, streams the scores and reports the ranking.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::analysis::{Evaluation, SawError, SawModel};
use crate::domain::foundation::ErrorCode;
use crate::ports::{RankingReporter, ReportError, ScoreSink};

/// One criterion as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionInput {
    pub name: String,
    pub weight: f64,
    /// `"benefit"` or `"cost"`.
    pub orientation: String,
}

impl CriterionInput {
    pub fn new(name: impl Into<String>, weight: f64, orientation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weight,
            orientation: orientation.into(),
        }
    }
}

/// One alternative as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeInput {
    pub name: String,
    pub raw_values: Vec<f64>,
}

impl AlternativeInput {
    pub fn new(name: impl Into<String>, raw_values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            raw_values,
        }
    }
}

/// Command to evaluate one decision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluateDecisionCommand {
    pub criteria: Vec<CriterionInput>,
    pub alternatives: Vec<AlternativeInput>,
}

impl EvaluateDecisionCommand {
    /// Registers every criterion, then every alternative, in order.
    ///
    /// Stops at the first invalid entry.
    pub fn build_model(&self) -> Result<SawModel, SawError> {
        let mut model = SawModel::new();
        for criterion in &self.criteria {
            model.add_criterion_labeled(
                criterion.name.as_str(),
                criterion.weight,
                &criterion.orientation,
            )?;
        }
        for alternative in &self.alternatives {
            model.add_alternative(alternative.name.as_str(), alternative.raw_values.clone())?;
        }
        Ok(model)
    }
}

/// Result of a successful evaluation.
#[derive(Debug, Clone)]
pub struct EvaluateDecisionResult {
    pub evaluation: Evaluation,
}

/// Failures of the evaluate-decision use case.
#[derive(Debug, Error)]
pub enum EvaluateDecisionError {
    #[error("[{}] {0}", .0.code())]
    Invalid(#[from] SawError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

impl EvaluateDecisionError {
    /// Domain error code, if the failure came from the input data.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            EvaluateDecisionError::Invalid(err) => Some(err.code()),
            EvaluateDecisionError::Report(_) => None,
        }
    }
}

/// Handler for evaluating decisions.
pub struct EvaluateDecisionHandler<S: ScoreSink, R: RankingReporter> {
    sink: S,
    reporter: R,
}

impl<S: ScoreSink, R: RankingReporter> EvaluateDecisionHandler<S, R> {
    pub fn new(sink: S, reporter: R) -> Self {
        Self { sink, reporter }
    }

    pub fn handle(
        &mut self,
        cmd: &EvaluateDecisionCommand,
    ) -> Result<EvaluateDecisionResult, EvaluateDecisionError> {
        // 1. Build and validate the model
        let model = cmd.build_model()?;
        debug!(
            criteria = model.criteria().len(),
            alternatives = model.alternatives().len(),
            "Decision model built"
        );

        // 2. Evaluate, streaming scores to the sink
        let evaluation = model.evaluate_with(&mut self.sink)?;

        // 3. Report
        self.reporter.report(&evaluation)?;

        info!(
            best = %evaluation.best().name,
            score = evaluation.best_score(),
            "Decision evaluated"
        );

        Ok(EvaluateDecisionResult { evaluation })
    }

    /// Returns the sink and reporter, e.g. to inspect what they captured.
    pub fn into_parts(self) -> (S, R) {
        (self.sink, self.reporter)
    }
}
