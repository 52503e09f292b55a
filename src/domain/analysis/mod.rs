//! Analysis Module - Simple Additive Weighting (SAW) scoring.
//!
//! # Components
//!
//! - `CriterionRegistry` - Ordered criteria with weight and benefit/cost orientation
//! - `AlternativeStore` - Ordered alternatives, one raw value per criterion
//! - `SawEvaluator` - Extrema, normalization, weighted sum, best selection
//! - `SawModel` - Owns one registry and one store for a single decision
//!
//! # Design Philosophy
//!
//! Evaluation is a pure function of the registry and store contents. Results
//! come back as an owned [`Evaluation`] snapshot; nothing is written back into
//! the inputs, so repeated evaluations of unchanged inputs are identical.

mod alternatives;
mod criteria;
mod decision_model;
mod errors;
mod saw_evaluator;

// Re-export all public types
pub use alternatives::{Alternative, AlternativeHandle, AlternativeStore};
pub use criteria::{Criterion, CriterionRegistry};
pub use decision_model::SawModel;
pub use errors::{InputKind, SawError};
pub use saw_evaluator::{
    normalize, weighted_sum, AlternativeScore, CriterionExtrema, Evaluation, SawEvaluator,
};
