//! Data quality scoring.
//!
//! This module turns null and duplicate prevalence into a 0-10 score and a
//! three-tier verdict.

mod scorer;

pub use scorer::{
    ACCEPTABLE_THRESHOLD, EXCELLENT_THRESHOLD, MAX_SCORE, QualityScorer, classify_score,
    score_from_percentages,
};
