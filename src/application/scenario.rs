//! Built-in reference decision: five weighted criteria, four alternatives.
//!
//! This is the data the binary evaluates. Library callers build their own
//! [`EvaluateDecisionCommand`].

use super::handlers::{AlternativeInput, CriterionInput, EvaluateDecisionCommand};

/// Criteria and alternatives of the reference decision.
///
/// Cost criteria (`Logros`, `Acreditacion`) prefer low raw values.
pub fn reference_command() -> EvaluateDecisionCommand {
    EvaluateDecisionCommand {
        criteria: vec![
            CriterionInput::new("Logros", 5.0, "cost"),
            CriterionInput::new("Ambiente", 4.0, "benefit"),
            CriterionInput::new("Acreditacion", 3.0, "cost"),
            CriterionInput::new("Curriculum", 2.0, "benefit"),
            CriterionInput::new("ExtraAct", 1.0, "benefit"),
        ],
        alternatives: vec![
            AlternativeInput::new("Alternativa 1", vec![4.0, 2.0, 4.0, 2.0, 2.0]),
            AlternativeInput::new("Alternativa 2", vec![2.0, 3.0, 3.0, 2.0, 1.0]),
            AlternativeInput::new("Alternativa 3", vec![2.0, 3.0, 3.0, 1.0, 2.0]),
            AlternativeInput::new("Alternativa 4", vec![4.0, 1.0, 3.0, 1.0, 1.0]),
        ],
    }
}
