//! Plain-text Ranking Reporter
//!
//! Prints one line per alternative in store order, then the winner:
//!
//! ```text
//! Alternative 1 (Alternativa 1): 10.4167
//! Alternative 2 (Alternativa 2): 14.5000
//! Best alternative: Alternativa 2
//! ```

use std::io::Write;

use crate::domain::analysis::Evaluation;
use crate::ports::{RankingReporter, ReportError};

/// Writes a human-readable summary to any `Write`.
#[derive(Debug)]
pub struct TextReporter<W: Write> {
    out: W,
    precision: usize,
}

impl<W: Write> TextReporter<W> {
    /// Create a reporter printing scores with `precision` decimals
    pub fn new(out: W, precision: usize) -> Self {
        Self { out, precision }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RankingReporter for TextReporter<W> {
    fn report(&mut self, evaluation: &Evaluation) -> Result<(), ReportError> {
        for score in evaluation.scores() {
            writeln!(
                self.out,
                "Alternative {} ({}): {:.*}",
                score.handle.index() + 1,
                score.name,
                self.precision,
                score.score
            )?;
        }
        writeln!(self.out, "Best alternative: {}", evaluation.best().name)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::SawModel;
    use crate::domain::foundation::Orientation;

    fn evaluation() -> Evaluation {
        let mut model = SawModel::new();
        model.add_criterion("Price", 2.0, Orientation::Cost).unwrap();
        model.add_criterion("Quality", 1.0, Orientation::Benefit).unwrap();
        model.add_alternative("Cheap", vec![2.0, 1.0]).unwrap();
        model.add_alternative("Premium", vec![4.0, 4.0]).unwrap();
        model.evaluate().unwrap()
    }

    #[test]
    fn text_report_lists_scores_then_winner() {
        let mut reporter = TextReporter::new(Vec::new(), 2);
        reporter.report(&evaluation()).unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(
            output,
            "Alternative 1 (Cheap): 2.25\nAlternative 2 (Premium): 2.00\nBest alternative: Cheap\n"
        );
    }

    #[test]
    fn text_report_honours_precision() {
        let mut reporter = TextReporter::new(Vec::new(), 0);
        reporter.report(&evaluation()).unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(output.starts_with("Alternative 1 (Cheap): 2\n"));
    }
}
