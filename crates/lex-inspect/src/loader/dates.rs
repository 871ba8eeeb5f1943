//! Strict `YYYY-MM-DD` reinterpretation of text columns.

use crate::utils::is_text_dtype;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use polars::prelude::*;
use regex::Regex;
use tracing::debug;

/// `NaiveDate::num_days_from_ce` of 1970-01-01, the origin of polars `Date`.
pub(crate) const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Invalid regex: YYYY-MM-DD"));

/// Parse a cell as a strict `YYYY-MM-DD` calendar date.
///
/// Zero padding is required and no surrounding whitespace is accepted.
pub fn parse_strict_date(value: &str) -> Option<NaiveDate> {
    if !ISO_DATE.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Days since the unix epoch, the physical representation of polars `Date`.
#[inline]
pub(crate) fn days_since_epoch(date: NaiveDate) -> i32 {
    date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE
}

/// Reinterpret a text column as `Date`.
///
/// Returns `None` (and the caller keeps the original column) unless the
/// column is text, holds at least one value, and every non-null cell parses
/// strictly. There is no partial conversion.
pub fn try_reinterpret_as_date(series: &Series) -> PolarsResult<Option<Series>> {
    if !is_text_dtype(series.dtype()) || series.null_count() == series.len() {
        return Ok(None);
    }

    let str_series = series.str()?;
    let mut days: Vec<Option<i32>> = Vec::with_capacity(str_series.len());

    for opt_val in str_series.into_iter() {
        match opt_val {
            Some(val) => match parse_strict_date(val) {
                Some(date) => days.push(Some(days_since_epoch(date))),
                None => {
                    debug!(
                        "Column '{}' kept as text: '{}' is not YYYY-MM-DD",
                        series.name(),
                        val
                    );
                    return Ok(None);
                }
            },
            None => days.push(None),
        }
    }

    let date_series = Series::new(series.name().clone(), days).cast(&DataType::Date)?;
    Ok(Some(date_series))
}

/// Reinterpret every eligible column of a table as `Date`.
///
/// Returns the new table and the names of the converted columns.
pub fn reinterpret_date_columns(df: DataFrame) -> PolarsResult<(DataFrame, Vec<String>)> {
    let mut converted = Vec::new();
    let mut columns: Vec<Column> = Vec::with_capacity(df.width());

    for col in df.get_columns() {
        match try_reinterpret_as_date(col.as_materialized_series())? {
            Some(date_series) => {
                converted.push(col.name().to_string());
                columns.push(Column::from(date_series));
            }
            None => columns.push(col.clone()),
        }
    }

    if converted.is_empty() {
        return Ok((df, converted));
    }

    Ok((DataFrame::new(columns)?, converted))
}
