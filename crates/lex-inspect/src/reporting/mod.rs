//! Report output.
//!
//! Reports are printed as plain text blocks by default, or serialized as
//! JSON for piping into other tools.

mod text;

pub use text::{
    render_characters, render_dates, render_descriptive, render_preview, render_quality,
    render_report,
};

use crate::error::Result;
use crate::types::InspectionReport;

/// Serialize a report as pretty-printed JSON.
pub fn report_to_json(report: &InspectionReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
