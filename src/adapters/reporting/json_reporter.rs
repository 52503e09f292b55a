//! JSON Ranking Reporter
//!
//! Serializes the whole evaluation (extrema, per-alternative scores, winner)
//! followed by a newline. Intended for piping into other tools.

use serde::Serialize;
use std::io::Write;

use crate::domain::analysis::{AlternativeScore, CriterionExtrema, Evaluation};
use crate::ports::{RankingReporter, ReportError};

/// Wire shape of a JSON report.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    extrema: &'a [CriterionExtrema],
    scores: &'a [AlternativeScore],
    best: &'a str,
    best_score: f64,
}

/// Writes the evaluation as pretty-printed JSON.
#[derive(Debug)]
pub struct JsonReporter<W: Write> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RankingReporter for JsonReporter<W> {
    fn report(&mut self, evaluation: &Evaluation) -> Result<(), ReportError> {
        let best = evaluation.best();
        let report = JsonReport {
            extrema: evaluation.extrema(),
            scores: evaluation.scores(),
            best: &best.name,
            best_score: best.score,
        };
        serde_json::to_writer_pretty(&mut self.out, &report)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::SawModel;
    use crate::domain::foundation::Orientation;

    #[test]
    fn json_report_contains_winner_and_scores() {
        let mut model = SawModel::new();
        model.add_criterion("Price", 1.0, Orientation::Cost).unwrap();
        model.add_alternative("A", vec![2.0]).unwrap();
        model.add_alternative("B", vec![1.0]).unwrap();
        let evaluation = model.evaluate().unwrap();

        let mut reporter = JsonReporter::new(Vec::new());
        reporter.report(&evaluation).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&reporter.into_inner()).unwrap();
        assert_eq!(value["best"], "B");
        assert_eq!(value["best_score"], 1.0);
        assert_eq!(value["scores"].as_array().unwrap().len(), 2);
        assert_eq!(value["scores"][0]["name"], "A");
        assert_eq!(value["scores"][0]["handle"], 0);
        assert_eq!(value["extrema"][0]["orientation"], "cost");
        assert_eq!(value["extrema"][0]["min"], 1.0);
    }
}
