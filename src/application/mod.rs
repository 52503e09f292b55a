//! Application layer - Commands and Handlers.
//!
//! This layer turns caller input into a decision model, runs the evaluation
//! and hands the results to the reporting ports.

pub mod handlers;
pub mod scenario;

pub use handlers::{
    AlternativeInput, CriterionInput, EvaluateDecisionCommand, EvaluateDecisionError,
    EvaluateDecisionHandler, EvaluateDecisionResult,
};
pub use scenario::reference_command;
