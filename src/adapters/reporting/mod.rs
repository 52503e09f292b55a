//! Reporting adapters: score sinks and ranking reporters.

mod json_reporter;
mod score_sinks;
mod text_reporter;

pub use json_reporter::JsonReporter;
pub use score_sinks::{CollectingScoreSink, TracingScoreSink};
pub use text_reporter::TextReporter;
