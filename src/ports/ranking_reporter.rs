//! Ranking Reporter Port - Renders a finished evaluation for a human or a tool.
//!
//! The domain produces an [`Evaluation`]; adapters (plain text, JSON) decide
//! how it is presented.

use thiserror::Error;

use crate::domain::analysis::Evaluation;

/// Port for presenting an evaluation.
///
/// # Usage
///
/// ```rust,ignore
/// let mut reporter = TextReporter::new(std::io::stdout(), 4);
/// reporter.report(&evaluation)?;
/// ```
pub trait RankingReporter {
    /// Writes the full report for `evaluation`.
    ///
    /// # Errors
    ///
    /// Returns `ReportError` if the output cannot be written or encoded.
    fn report(&mut self, evaluation: &Evaluation) -> Result<(), ReportError>;
}

/// Errors that can occur while writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode report: {0}")]
    Encoding(#[from] serde_json::Error),
}
