//! Score Sink Port - Receives per-alternative scores as an evaluation completes.
//!
//! The evaluator never prints. Whoever runs an evaluation decides where the
//! scores go by passing a sink (an in-memory collector, the log, ...).

use crate::domain::analysis::AlternativeScore;

/// Port for consuming the score of every alternative, in store order.
///
/// # Contract
///
/// - `record` is called once per alternative, in insertion order
/// - `record` is only called after the whole evaluation succeeded, so a sink
///   never observes a partial result
pub trait ScoreSink {
    /// Receives one alternative's score.
    fn record(&mut self, score: &AlternativeScore);
}

impl<F> ScoreSink for F
where
    F: FnMut(&AlternativeScore),
{
    fn record(&mut self, score: &AlternativeScore) {
        self(score)
    }
}
