//! Re-validation of columns the loader typed as dates.
//!
//! No new inference happens here: only columns that already carry a polars
//! `Date` or `Datetime` dtype are examined. Each value is checked against
//! chrono's representable range, rendered, and parsed back with the lenient
//! layouts below.

use crate::loader::UNIX_EPOCH_DAYS_FROM_CE;
use crate::types::DateVerification;
use crate::utils::is_date_dtype;
use chrono::format::ParseErrorKind;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use polars::prelude::*;
use tracing::debug;

const DATETIME_LAYOUTS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];
const DATE_LAYOUTS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%d-%m-%Y"];

/// Years that fit the four-digit `YYYY` field.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

/// Why a value failed lenient date parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateIssue {
    /// No accepted layout matches the token.
    #[error("unparseable date '{0}'")]
    Format(String),
    /// The token is well formed but names a date outside the valid range.
    #[error("date out of range '{0}'")]
    Range(String),
}

/// Parse a date or datetime token, accepting several common layouts.
pub fn parse_date_lenient(value: &str) -> Result<NaiveDateTime, DateIssue> {
    let token = value.trim();
    let mut out_of_range = false;

    for layout in DATETIME_LAYOUTS {
        match NaiveDateTime::parse_from_str(token, layout) {
            Ok(datetime) => return Ok(datetime),
            Err(e) => out_of_range |= is_range_error(e.kind()),
        }
    }

    for layout in DATE_LAYOUTS {
        match NaiveDate::parse_from_str(token, layout) {
            Ok(date) => return Ok(date.and_time(NaiveTime::MIN)),
            Err(e) => out_of_range |= is_range_error(e.kind()),
        }
    }

    if out_of_range {
        Err(DateIssue::Range(token.to_string()))
    } else {
        Err(DateIssue::Format(token.to_string()))
    }
}

fn is_range_error(kind: ParseErrorKind) -> bool {
    matches!(kind, ParseErrorKind::OutOfRange | ParseErrorKind::Impossible)
}

/// Check every date-typed column of a table.
pub fn verify_date_columns(df: &DataFrame) -> PolarsResult<DateVerification> {
    let mut verification = DateVerification::default();

    for col in df.get_columns() {
        if !is_date_dtype(col.dtype()) {
            continue;
        }

        let name = col.name().to_string();
        let issues = column_issues(col.as_materialized_series())?;

        if let Some(token) = issues.iter().find_map(|issue| match issue {
            DateIssue::Format(token) => Some(token),
            DateIssue::Range(_) => None,
        }) {
            verification
                .format_errors
                .push(format!("Format error in column '{}': {}", name, token));
        }
        if let Some(token) = issues.iter().find_map(|issue| match issue {
            DateIssue::Range(token) => Some(token),
            DateIssue::Format(_) => None,
        }) {
            verification
                .range_errors
                .push(format!("Range error in column '{}': {}", name, token));
        }

        debug!("Date column '{}': {} issues", name, issues.len());
        verification.date_columns.push(name);
    }

    Ok(verification)
}

/// Collect the issues of one date column.
fn column_issues(series: &Series) -> PolarsResult<Vec<DateIssue>> {
    let physical = series.to_physical_repr();
    let mut issues = Vec::new();

    match series.dtype() {
        DataType::Date => {
            for days in physical.i32()?.into_iter().flatten() {
                let date = days
                    .checked_add(UNIX_EPOCH_DAYS_FROM_CE)
                    .and_then(NaiveDate::from_num_days_from_ce_opt);
                match date {
                    Some(date) if !YEAR_RANGE.contains(&date.year()) => {
                        issues.push(DateIssue::Range(date.to_string()))
                    }
                    Some(date) => {
                        let rendered = date.format("%Y-%m-%d").to_string();
                        if let Err(issue) = parse_date_lenient(&rendered) {
                            issues.push(issue);
                        }
                    }
                    None => issues.push(DateIssue::Range(format!(
                        "{} days since 1970-01-01",
                        days
                    ))),
                }
            }
        }
        DataType::Datetime(unit, _) => {
            for ticks in physical.i64()?.into_iter().flatten() {
                let datetime = match unit {
                    TimeUnit::Milliseconds => DateTime::from_timestamp_millis(ticks),
                    TimeUnit::Microseconds => DateTime::from_timestamp_micros(ticks),
                    TimeUnit::Nanoseconds => Some(DateTime::from_timestamp_nanos(ticks)),
                };
                match datetime {
                    Some(datetime) if !YEAR_RANGE.contains(&datetime.year()) => {
                        issues.push(DateIssue::Range(datetime.to_string()))
                    }
                    Some(datetime) => {
                        let rendered = datetime
                            .naive_utc()
                            .format("%Y-%m-%d %H:%M:%S%.f")
                            .to_string();
                        if let Err(issue) = parse_date_lenient(&rendered) {
                            issues.push(issue);
                        }
                    }
                    None => issues.push(DateIssue::Range(format!(
                        "{} {:?} since epoch",
                        ticks, unit
                    ))),
                }
            }
        }
        _ => {}
    }

    Ok(issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::reinterpret_date_columns;

    #[test]
    fn test_parse_date_lenient_layouts() {
        let expected = NaiveDate::from_ymd_opt(2023, 3, 15)
            .unwrap()
            .and_time(NaiveTime::MIN);

        assert_eq!(parse_date_lenient("2023-03-15").unwrap(), expected);
        assert_eq!(parse_date_lenient("2023/03/15").unwrap(), expected);
        assert_eq!(parse_date_lenient("15/03/2023").unwrap(), expected);
        assert_eq!(parse_date_lenient(" 2023-03-15 ").unwrap(), expected);
        assert_eq!(parse_date_lenient("2023-03-15 00:00:00").unwrap(), expected);
    }

    #[test]
    fn test_parse_date_lenient_format_error() {
        assert_eq!(
            parse_date_lenient("mañana"),
            Err(DateIssue::Format("mañana".to_string()))
        );
    }

    #[test]
    fn test_parse_date_lenient_range_error() {
        assert_eq!(
            parse_date_lenient("2023-13-01"),
            Err(DateIssue::Range("2023-13-01".to_string()))
        );
    }

    #[test]
    fn test_verify_clean_date_columns() {
        let df = df!(
            "alta" => &["2023-01-01", "2023-06-30"],
            "baja" => &[Some("2024-01-01"), None],
            "nombre" => &["Ana", "Luis"]
        )
        .unwrap();
        let (df, _) = reinterpret_date_columns(df).unwrap();

        let verification = verify_date_columns(&df).unwrap();

        assert_eq!(verification.date_columns, vec!["alta", "baja"]);
        assert!(verification.is_clean());
    }

    #[test]
    fn test_verify_text_dates_are_not_reconsidered() {
        // the loader rejected this column, so it is not a date column here
        let df = df!("fecha" => &["2023-01-01", "2023/01/02"]).unwrap();
        let verification = verify_date_columns(&df).unwrap();

        assert!(verification.date_columns.is_empty());
        assert!(verification.is_clean());
    }

    #[test]
    fn test_verify_out_of_range_date() {
        let series = Series::new("lejana".into(), &[Some(0i32), Some(i32::MAX), None])
            .cast(&DataType::Date)
            .unwrap();
        let df = DataFrame::new(vec![Column::from(series)]).unwrap();

        let verification = verify_date_columns(&df).unwrap();

        assert_eq!(verification.date_columns, vec!["lejana"]);
        assert!(verification.format_errors.is_empty());
        assert_eq!(verification.range_errors.len(), 1);
        assert!(verification.range_errors[0].contains("'lejana'"));
    }

    #[test]
    fn test_verify_five_digit_year_is_range_error() {
        // about 8200 years after the epoch
        let series = Series::new("futura".into(), &[3_000_000i32])
            .cast(&DataType::Date)
            .unwrap();
        let df = DataFrame::new(vec![Column::from(series)]).unwrap();

        let verification = verify_date_columns(&df).unwrap();

        assert!(verification.format_errors.is_empty());
        assert_eq!(verification.range_errors.len(), 1);
    }

    #[test]
    fn test_verify_out_of_range_datetime() {
        let series = Series::new("marca".into(), &[1_700_000_000_000i64, i64::MAX])
            .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))
            .unwrap();
        let df = DataFrame::new(vec![Column::from(series)]).unwrap();

        let verification = verify_date_columns(&df).unwrap();

        assert_eq!(verification.date_columns, vec!["marca"]);
        assert_eq!(verification.range_errors.len(), 1);
    }
}
