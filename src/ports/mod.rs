//! Ports - Interfaces between the scoring domain and the outside world.
//!
//! # Module Organization
//!
//! - `score_sink` - Streaming consumer of per-alternative scores
//! - `ranking_reporter` - Presentation of a finished evaluation

mod ranking_reporter;
mod score_sink;

pub use ranking_reporter::{RankingReporter, ReportError};
pub use score_sink::ScoreSink;
