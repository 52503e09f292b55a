//! Score sink adapters: in-memory collection and structured logging.

use tracing::info;

use crate::domain::analysis::AlternativeScore;
use crate::ports::ScoreSink;

/// Keeps every recorded score in memory.
/// Useful for testing and for callers that post-process scores.
#[derive(Debug, Clone, Default)]
pub struct CollectingScoreSink {
    scores: Vec<AlternativeScore>,
}

impl CollectingScoreSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Scores recorded so far, in the order received
    pub fn scores(&self) -> &[AlternativeScore] {
        &self.scores
    }

    /// Take ownership of the recorded scores
    pub fn into_scores(self) -> Vec<AlternativeScore> {
        self.scores
    }
}

impl ScoreSink for CollectingScoreSink {
    fn record(&mut self, score: &AlternativeScore) {
        self.scores.push(score.clone());
    }
}

/// Emits one `info` event per score.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingScoreSink;

impl ScoreSink for TracingScoreSink {
    fn record(&mut self, score: &AlternativeScore) {
        info!(
            alternative = %score.name,
            position = score.handle.index() + 1,
            score = score.score,
            "Alternative scored"
        );
    }
}
