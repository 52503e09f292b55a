//! Command handlers.

mod evaluate_decision;

pub use evaluate_decision::{
    AlternativeInput, CriterionInput, EvaluateDecisionCommand, EvaluateDecisionError,
    EvaluateDecisionHandler, EvaluateDecisionResult,
};
