//! Domain layer containing the scoring logic and its types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (orientation, weight, errors)
//! - `analysis` - Simple Additive Weighting: criteria, alternatives, evaluation

pub mod analysis;
pub mod foundation;
