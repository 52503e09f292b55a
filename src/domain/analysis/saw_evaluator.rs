//! SAW Evaluator - Extremum discovery, normalization, weighted aggregation.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{
    AlternativeHandle, AlternativeStore, Criterion, CriterionRegistry, InputKind, SawError,
};
use crate::domain::foundation::Orientation;

/// Observed range of raw values for one criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionExtrema {
    pub criterion: String,
    pub orientation: Orientation,
    pub max: f64,
    pub min: f64,
}

/// Normalized values and weighted score of one alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeScore {
    pub handle: AlternativeHandle,
    pub name: String,
    /// One value in `(0, 1]` per criterion; `1` marks the best observed raw value.
    pub normalized_values: Vec<f64>,
    pub score: f64,
}

/// Snapshot of one evaluation run.
///
/// Owns everything it reports, so it stays valid after the inputs change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    extrema: Vec<CriterionExtrema>,
    scores: Vec<AlternativeScore>,
    best: AlternativeHandle,
}

impl Evaluation {
    /// Per-criterion extrema, in criterion order.
    pub fn extrema(&self) -> &[CriterionExtrema] {
        &self.extrema
    }

    /// Scores in store order.
    pub fn scores(&self) -> &[AlternativeScore] {
        &self.scores
    }

    pub fn best_handle(&self) -> AlternativeHandle {
        self.best
    }

    /// The winning alternative's score entry.
    pub fn best(&self) -> &AlternativeScore {
        // `best` is always taken from `scores` during evaluation.
        &self.scores[self.best.index()]
    }

    pub fn best_score(&self) -> f64 {
        self.best().score
    }

    pub fn score_of(&self, handle: AlternativeHandle) -> Option<&AlternativeScore> {
        self.scores.get(handle.index())
    }

    /// Scores ordered best first. Equal scores keep store order.
    pub fn ranking(&self) -> Vec<&AlternativeScore> {
        let mut ranked: Vec<&AlternativeScore> = self.scores.iter().collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }
}

/// Normalizes one raw value against its criterion's extrema.
///
/// - Benefit: `raw / max`
/// - Cost: `min / raw`
///
/// The caller guarantees `raw > 0`; see [`SawEvaluator::evaluate`].
pub fn normalize(raw: f64, extrema: &CriterionExtrema, orientation: Orientation) -> f64 {
    match orientation {
        Orientation::Benefit => raw / extrema.max,
        Orientation::Cost => extrema.min / raw,
    }
}

/// Σ normalized[i] × weight[i].
pub fn weighted_sum(normalized: &[f64], criteria: &[Criterion]) -> f64 {
    normalized
        .iter()
        .zip(criteria)
        .map(|(value, criterion)| value * criterion.weight().value())
        .sum()
}

/// Simple Additive Weighting evaluation functions.
pub struct SawEvaluator;

impl SawEvaluator {
    /// Scores every alternative and selects the best one.
    ///
    /// # Algorithm
    /// 1. Extrema: `max_i`, `min_i` over all alternatives for each criterion
    /// 2. Normalization: benefit `raw / max_i`, cost `min_i / raw`
    /// 3. Score: Σ normalized × weight; the first alternative with the
    ///    strictly greatest score wins
    ///
    /// # Errors
    /// - `EmptyInput`: no criteria or no alternatives
    /// - `ArityMismatch`: a row does not have one value per criterion
    /// - `DegenerateNormalization`: a raw value is zero, negative or not
    ///   finite, or its normalized value falls outside `(0, 1]`
    /// - `NonFiniteScore`: a weighted sum overflows
    ///
    /// No score is produced once any of these is detected.
    pub fn evaluate(
        criteria: &CriterionRegistry,
        alternatives: &AlternativeStore,
    ) -> Result<Evaluation, SawError> {
        let extrema = Self::find_extrema(criteria, alternatives)?;
        let normalized = Self::normalize_all(criteria, alternatives, &extrema)?;

        let mut scores = Vec::with_capacity(alternatives.len());
        let mut best: Option<(AlternativeHandle, f64)> = None;

        for ((handle, alternative), normalized_values) in alternatives.iter().zip(normalized) {
            let score = weighted_sum(&normalized_values, criteria.criteria());
            if !score.is_finite() {
                warn!(
                    alternative = alternative.name(),
                    score,
                    "Weighted score is not finite"
                );
                return Err(SawError::NonFiniteScore {
                    alternative_index: handle.index(),
                    alternative: alternative.name().to_string(),
                });
            }

            // Strictly greater: ties go to the earlier alternative.
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((handle, score));
            }

            scores.push(AlternativeScore {
                handle,
                name: alternative.name().to_string(),
                normalized_values,
                score,
            });
        }

        let (best, best_score) = best.ok_or(SawError::empty(InputKind::Alternatives))?;

        debug!(
            best = %best,
            best_score,
            alternatives = scores.len(),
            "Selected best alternative"
        );

        Ok(Evaluation {
            extrema,
            scores,
            best,
        })
    }

    /// Finds the maximum and minimum raw value of every criterion.
    ///
    /// Alternatives are visited in store order.
    ///
    /// # Errors
    /// - `EmptyInput`: no criteria or no alternatives
    /// - `ArityMismatch`: a row does not have one value per criterion
    pub fn find_extrema(
        criteria: &CriterionRegistry,
        alternatives: &AlternativeStore,
    ) -> Result<Vec<CriterionExtrema>, SawError> {
        if criteria.is_empty() {
            warn!("Evaluation requested without criteria");
            return Err(SawError::empty(InputKind::Criteria));
        }
        if alternatives.is_empty() {
            warn!("Evaluation requested without alternatives");
            return Err(SawError::empty(InputKind::Alternatives));
        }

        // Criteria may have been added after some alternatives.
        for (handle, alternative) in alternatives.iter() {
            if alternative.raw_values().len() != criteria.len() {
                warn!(
                    alternative = alternative.name(),
                    expected = criteria.len(),
                    actual = alternative.raw_values().len(),
                    "Alternative no longer matches criterion count"
                );
                return Err(SawError::ArityMismatch {
                    alternative_index: handle.index(),
                    alternative: alternative.name().to_string(),
                    expected: criteria.len(),
                    actual: alternative.raw_values().len(),
                });
            }
        }

        let extrema: Vec<CriterionExtrema> = criteria
            .criteria()
            .iter()
            .enumerate()
            .map(|(i, criterion)| {
                let (max, min) = alternatives.alternatives().iter().fold(
                    (f64::NEG_INFINITY, f64::INFINITY),
                    |(max, min), alternative| {
                        let value = alternative.raw_values()[i];
                        (max.max(value), min.min(value))
                    },
                );
                CriterionExtrema {
                    criterion: criterion.name().to_string(),
                    orientation: criterion.orientation(),
                    max,
                    min,
                }
            })
            .collect();

        debug!(
            criteria = criteria.len(),
            alternatives = alternatives.len(),
            "Computed criterion extrema"
        );

        Ok(extrema)
    }

    /// Normalizes every raw value, row by row.
    ///
    /// Fails on the first (alternative, criterion) pair whose raw value or
    /// normalized value is not finite and strictly positive.
    fn normalize_all(
        criteria: &CriterionRegistry,
        alternatives: &AlternativeStore,
        extrema: &[CriterionExtrema],
    ) -> Result<Vec<Vec<f64>>, SawError> {
        alternatives
            .iter()
            .map(|(handle, alternative)| {
                criteria
                    .criteria()
                    .iter()
                    .zip(extrema)
                    .zip(alternative.raw_values())
                    .enumerate()
                    .map(|(criterion_index, ((criterion, range), &raw))| {
                        if !(raw.is_finite() && raw > 0.0) {
                            warn!(
                                alternative = alternative.name(),
                                criterion = criterion.name(),
                                raw,
                                "Raw value cannot be normalized"
                            );
                            return Err(SawError::DegenerateNormalization {
                                alternative_index: handle.index(),
                                alternative: alternative.name().to_string(),
                                criterion_index,
                                criterion: criterion.name().to_string(),
                                value: raw,
                            });
                        }
                        let value = normalize(raw, range, criterion.orientation());
                        // Extreme ratios can underflow to zero or overflow.
                        if !(value.is_finite() && value > 0.0) {
                            warn!(
                                alternative = alternative.name(),
                                criterion = criterion.name(),
                                raw,
                                normalized = value,
                                "Normalized value out of range"
                            );
                            return Err(SawError::DegenerateNormalization {
                                alternative_index: handle.index(),
                                alternative: alternative.name().to_string(),
                                criterion_index,
                                criterion: criterion.name().to_string(),
                                value: raw,
                            });
                        }
                        Ok(value)
                    })
                    .collect()
            })
            .collect()
    }
}
