use crate::utils::ColumnKind;
use serde::{Deserialize, Serialize};
use std::ops::Add;

// ============================================================================
// Character Analysis
// ============================================================================

/// Uppercase and letter totals. The counters overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterCounts {
    pub uppercase: usize,
    pub letters: usize,
}

impl CharacterCounts {
    pub fn new(uppercase: usize, letters: usize) -> Self {
        Self { uppercase, letters }
    }
}

impl Add for CharacterCounts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            uppercase: self.uppercase + rhs.uppercase,
            letters: self.letters + rhs.letters,
        }
    }
}

// ============================================================================
// Descriptive Analysis
// ============================================================================

/// Null count of one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnNulls {
    pub column: String,
    pub kind: ColumnKind,
    pub null_count: usize,
}

/// One row of the final descriptive summary.
///
/// The duplicate figures are table-wide and repeated on every row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub column: String,
    pub null_percentage: f64,
    pub duplicate_rows: usize,
    pub duplicate_percentage: f64,
}

/// First rows of the table with text cells trimmed, rendered as strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreviewTable {
    pub columns: Vec<String>,
    /// Row-major cells; `None` is a null cell.
    pub rows: Vec<Vec<Option<String>>>,
}

/// Result of the descriptive pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveReport {
    pub row_count: usize,
    pub null_counts: Vec<ColumnNulls>,
    pub duplicate_rows: usize,
    pub duplicate_percentage: f64,
    pub preview: PreviewTable,
    pub summary: Vec<ColumnSummary>,
}

// ============================================================================
// Date Verification
// ============================================================================

/// Result of re-validating the date-typed columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateVerification {
    pub date_columns: Vec<String>,
    pub format_errors: Vec<String>,
    pub range_errors: Vec<String>,
}

impl DateVerification {
    /// True when neither error bucket has entries.
    pub fn is_clean(&self) -> bool {
        self.format_errors.is_empty() && self.range_errors.is_empty()
    }
}

// ============================================================================
// Quality Evaluation
// ============================================================================

/// Three-tier verdict derived from the quality score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityVerdict {
    Excellent,
    Acceptable,
    NeedsCleanup,
}

impl QualityVerdict {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent file!",
            Self::Acceptable => "Acceptable file, but it could improve.",
            Self::NeedsCleanup => "File needs urgent cleanup!",
        }
    }
}

impl std::fmt::Display for QualityVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Heuristic quality score and the figures it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityScore {
    pub total_nulls: usize,
    pub duplicate_rows: usize,
    pub total_cells: usize,
    pub null_percentage: f64,
    pub duplicate_percentage: f64,
    /// Not clamped; stays within 0-10 for realistic inputs.
    pub score: f64,
    pub verdict: QualityVerdict,
}

// ============================================================================
// Full Report
// ============================================================================

/// Everything one inspection produced, in output order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionReport {
    pub source_name: String,
    pub source_path: String,
    pub rows: usize,
    pub columns: usize,
    pub characters: CharacterCounts,
    pub descriptive: DescriptiveReport,
    pub dates: DateVerification,
    pub quality: QualityScore,
}

static_assertions::assert_impl_all!(InspectionReport: Send, Sync);
