//! Null counts, duplicate rows and the trimmed preview.

use crate::error::{InspectionError, Result};
use crate::types::{ColumnNulls, ColumnSummary, DescriptiveReport, PreviewTable};
use crate::utils::{column_kind, duplicate_row_count, is_text_dtype, percentage};
use polars::prelude::*;
use tracing::debug;

/// Compute the descriptive report of a table.
///
/// Percentages are taken over the row count, so a table without rows is
/// rejected with [`InspectionError::EmptyTable`].
pub fn analyze_descriptive(df: &DataFrame, preview_rows: usize) -> Result<DescriptiveReport> {
    let row_count = df.height();
    if row_count == 0 {
        return Err(InspectionError::EmptyTable(
            "descriptive analysis needs at least one row".to_string(),
        ));
    }

    let null_counts: Vec<ColumnNulls> = df
        .get_columns()
        .iter()
        .map(|col| ColumnNulls {
            column: col.name().to_string(),
            kind: column_kind(col.dtype()),
            null_count: col.null_count(),
        })
        .collect();

    let duplicate_rows = duplicate_row_count(df)?;
    let duplicate_percentage = percentage(duplicate_rows, row_count);
    debug!(
        "{} duplicate rows out of {} ({:.2}%)",
        duplicate_rows, row_count, duplicate_percentage
    );

    let summary = null_counts
        .iter()
        .map(|nulls| ColumnSummary {
            column: nulls.column.clone(),
            null_percentage: percentage(nulls.null_count, row_count),
            duplicate_rows,
            duplicate_percentage,
        })
        .collect();

    let trimmed = trim_text_columns(df)?;
    let preview = render_preview(&trimmed, preview_rows)?;

    Ok(DescriptiveReport {
        row_count,
        null_counts,
        duplicate_rows,
        duplicate_percentage,
        preview,
        summary,
    })
}

/// Strip leading and trailing whitespace from every text cell.
///
/// Other columns are returned unchanged.
pub fn trim_text_columns(df: &DataFrame) -> PolarsResult<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(df.width());

    for col in df.get_columns() {
        if !is_text_dtype(col.dtype()) {
            columns.push(col.clone());
            continue;
        }

        let str_series = col.as_materialized_series().str()?;
        let trimmed: StringChunked = str_series
            .into_iter()
            .map(|opt_val| opt_val.map(str::trim))
            .collect();
        columns.push(Column::from(
            trimmed.with_name(col.name().clone()).into_series(),
        ));
    }

    DataFrame::new(columns)
}

/// Render the first `rows` rows of a table as strings.
pub fn render_preview(df: &DataFrame, rows: usize) -> PolarsResult<PreviewTable> {
    let head = df.head(Some(rows));
    let mut preview = PreviewTable {
        columns: Vec::with_capacity(head.width()),
        rows: vec![Vec::with_capacity(head.width()); head.height()],
    };

    for col in head.get_columns() {
        preview.columns.push(col.name().to_string());

        let rendered = col.as_materialized_series().cast(&DataType::String)?;
        for (row, opt_val) in rendered.str()?.into_iter().enumerate() {
            preview.rows[row].push(opt_val.map(|v| v.to_string()));
        }
    }

    Ok(preview)
}
