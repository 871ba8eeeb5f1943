use crate::error::{InspectionError, Result};
use crate::types::{QualityScore, QualityVerdict};
use crate::utils::{duplicate_row_count, percentage, total_null_count};
use polars::prelude::*;
use tracing::debug;

/// Score of a table without nulls or duplicates.
pub const MAX_SCORE: f64 = 10.0;
/// Lowest score still rated excellent.
pub const EXCELLENT_THRESHOLD: f64 = 7.0;
/// Lowest score still rated acceptable.
pub const ACCEPTABLE_THRESHOLD: f64 = 5.0;

/// `10 - null_pct / 2 - dup_pct / 2`, unclamped.
pub fn score_from_percentages(null_percentage: f64, duplicate_percentage: f64) -> f64 {
    MAX_SCORE - null_percentage / 2.0 - duplicate_percentage / 2.0
}

/// Map a score to its verdict. Lower bounds are inclusive.
pub fn classify_score(score: f64) -> QualityVerdict {
    if score >= EXCELLENT_THRESHOLD {
        QualityVerdict::Excellent
    } else if score >= ACCEPTABLE_THRESHOLD {
        QualityVerdict::Acceptable
    } else {
        QualityVerdict::NeedsCleanup
    }
}

pub struct QualityScorer;

impl QualityScorer {
    /// Score a table.
    ///
    /// Both percentages use the cell count as denominator, including the
    /// duplicate one even though duplicates are counted in rows. A table
    /// without cells is rejected with [`InspectionError::EmptyTable`].
    pub fn evaluate(df: &DataFrame) -> Result<QualityScore> {
        let total_cells = df.height() * df.width();
        if total_cells == 0 {
            return Err(InspectionError::EmptyTable(
                "quality evaluation needs at least one cell".to_string(),
            ));
        }

        let total_nulls = total_null_count(df);
        let duplicate_rows = duplicate_row_count(df)?;

        let null_percentage = percentage(total_nulls, total_cells);
        let duplicate_percentage = percentage(duplicate_rows, total_cells);
        let score = score_from_percentages(null_percentage, duplicate_percentage);
        let verdict = classify_score(score);

        debug!(
            "Quality: {} nulls, {} duplicate rows over {} cells -> {:.2} ({:?})",
            total_nulls, duplicate_rows, total_cells, score, verdict
        );

        Ok(QualityScore {
            total_nulls,
            duplicate_rows,
            total_cells,
            null_percentage,
            duplicate_percentage,
            score,
            verdict,
        })
    }
}
