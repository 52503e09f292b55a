//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that form the vocabulary
//! of the scoring domain.

mod errors;
mod orientation;
mod weight;

pub use errors::{ErrorCode, ValidationError};
pub use orientation::Orientation;
pub use weight::Weight;
