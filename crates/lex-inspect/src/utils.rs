//! Shared utilities for the inspection passes.
//!
//! Column classification and the table-wide counts that more than one
//! analyzer needs live here so every pass agrees on them.

use polars::prelude::*;
use serde::{Deserialize, Serialize};

// =============================================================================
// Column Classification
// =============================================================================

/// Kind of a column as far as the analyzers are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Free text (polars `String`)
    Text,
    /// Calendar date or datetime
    Date,
    /// Integer or floating point numbers
    Numeric,
    /// Booleans, nulls and anything else
    Other,
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Date => "date",
            Self::Numeric => "numeric",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Check if a DataType holds calendar dates.
#[inline]
pub fn is_date_dtype(dtype: &DataType) -> bool {
    matches!(dtype, DataType::Date | DataType::Datetime(_, _))
}

/// Check if a DataType holds text.
#[inline]
pub fn is_text_dtype(dtype: &DataType) -> bool {
    matches!(dtype, DataType::String)
}

/// Get the kind of a DataType.
pub fn column_kind(dtype: &DataType) -> ColumnKind {
    if is_text_dtype(dtype) {
        ColumnKind::Text
    } else if is_date_dtype(dtype) {
        ColumnKind::Date
    } else if is_numeric_dtype(dtype) {
        ColumnKind::Numeric
    } else {
        ColumnKind::Other
    }
}

/// Names of the columns of a given kind, in table order.
pub fn columns_of_kind(df: &DataFrame, kind: ColumnKind) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|col| column_kind(col.dtype()) == kind)
        .map(|col| col.name().to_string())
        .collect()
}

// =============================================================================
// Table-wide Counts
// =============================================================================

/// Number of rows that repeat an earlier row in every column.
///
/// Nulls compare equal to each other.
pub fn duplicate_row_count(df: &DataFrame) -> PolarsResult<usize> {
    if df.height() == 0 || df.width() == 0 {
        return Ok(0);
    }
    let unique = df.unique::<&str, &str>(None, UniqueKeepStrategy::First, None)?;
    Ok(df.height() - unique.height())
}

/// Total number of null cells across the whole table.
pub fn total_null_count(df: &DataFrame) -> usize {
    df.get_columns().iter().map(|col| col.null_count()).sum()
}

/// `part / whole * 100`. Callers guarantee `whole > 0`.
#[inline]
pub fn percentage(part: usize, whole: usize) -> f64 {
    part as f64 / whole as f64 * 100.0
}
