//! Data Quality Inspection Library
//!
//! Loads semicolon-delimited text files with Polars and runs a fixed set of
//! descriptive checks over the resulting table.
//!
//! # Overview
//!
//! - **Loading**: header-first delimited files, with strict `YYYY-MM-DD`
//!   columns reinterpreted as dates (all or nothing per column)
//! - **Character Analysis**: uppercase and letter totals over text columns
//! - **Descriptive Analysis**: null counts, duplicate rows, trimmed preview
//! - **Date Verification**: re-validation of the date-typed columns
//! - **Quality Score**: a 0-10 score with a three-tier verdict
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use lex_inspect::{FileSource, InspectConfig, Inspector, reporting};
//!
//! let inspector = Inspector::new(InspectConfig::default());
//! let report = inspector.inspect_sources(&[FileSource::new("ventas", "ventas.csv")])?;
//!
//! println!("{}", reporting::render_report(&report));
//! println!("Score: {:.2} ({})", report.quality.score, report.quality.verdict);
//! ```
//!
//! # Errors
//!
//! Every fallible operation returns [`InspectionResult`]. Loading nothing
//! yields [`InspectionError::NoDataLoaded`]; a table without rows yields
//! [`InspectionError::EmptyTable`] instead of undefined percentages.

pub mod analysis;
pub mod config;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod quality;
pub mod reporting;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use analysis::{
    DateIssue, analyze_characters, analyze_descriptive, count_characters, parse_date_lenient,
    verify_date_columns,
};
pub use config::{ConfigValidationError, InspectConfig, InspectConfigBuilder};
pub use error::{InspectionError, Result as InspectionResult, ResultExt};
pub use loader::{DataLoader, FileSource, LoadedTable, parse_strict_date};
pub use pipeline::{InspectionStage, Inspector};
pub use quality::{QualityScorer, classify_score};
pub use types::{
    CharacterCounts, ColumnNulls, ColumnSummary, DateVerification, DescriptiveReport,
    InspectionReport, PreviewTable, QualityScore, QualityVerdict,
};
pub use utils::{ColumnKind, column_kind};
