//! Table analysis passes.
//!
//! This module provides the read-only passes run over a loaded table:
//! - Uppercase and letter counting over text columns
//! - Null and duplicate counting with a trimmed preview
//! - Re-validation of date-typed columns

mod characters;
mod dates;
mod descriptive;

pub use characters::{analyze_characters, count_characters};
pub use dates::{DateIssue, parse_date_lenient, verify_date_columns};
pub use descriptive::{analyze_descriptive, render_preview, trim_text_columns};
