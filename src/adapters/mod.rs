//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the scoring domain to its callers:
//! - `reporting` - Score sinks (in-memory, tracing) and reporters (text, JSON)

pub mod reporting;

pub use reporting::{CollectingScoreSink, JsonReporter, TextReporter, TracingScoreSink};
