//! Human-readable rendering of inspection results.

use crate::types::{
    CharacterCounts, DateVerification, DescriptiveReport, InspectionReport, PreviewTable,
    QualityScore,
};
use std::fmt::Write;

const RULE_WIDTH: usize = 40;
const MAX_CELL_WIDTH: usize = 24;
const NULL_CELL: &str = "null";
/// Width of the longest `ColumnKind` name.
const KIND_WIDTH: usize = 7;

/// Render every block of a report, in output order.
pub fn render_report(report: &InspectionReport) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Source: {} ({} rows x {} columns)",
        report.source_path, report.rows, report.columns
    );
    out.push('\n');
    out.push_str(&section(&format!("Character analysis for {}", report.source_name)));
    out.push_str(&render_characters(&report.characters));
    out.push('\n');
    out.push_str(&section(&format!("Descriptive analysis for {}", report.source_name)));
    out.push_str(&render_descriptive(&report.descriptive));
    out.push('\n');
    out.push_str(&section("Date column verification"));
    out.push_str(&render_dates(&report.dates));
    out.push('\n');
    out.push_str(&section("Quality evaluation"));
    out.push_str(&render_quality(&report.quality));

    out
}

fn section(title: &str) -> String {
    format!("{}\n{}\n", title, "-".repeat(RULE_WIDTH))
}

pub fn render_characters(counts: &CharacterCounts) -> String {
    format!(
        "Total uppercase letters: {}\nTotal letters: {}\n",
        counts.uppercase, counts.letters
    )
}

pub fn render_descriptive(report: &DescriptiveReport) -> String {
    let mut out = String::new();

    let name_width = report
        .null_counts
        .iter()
        .map(|nulls| display_width(&nulls.column))
        .max()
        .unwrap_or(0)
        .min(MAX_CELL_WIDTH);

    out.push_str("Nulls per column:\n");
    for nulls in &report.null_counts {
        let _ = writeln!(
            out,
            "  {:<width$}  {:<kind_width$}  {}",
            truncate_str(&nulls.column, MAX_CELL_WIDTH),
            nulls.kind.to_string(),
            nulls.null_count,
            width = name_width,
            kind_width = KIND_WIDTH
        );
    }
    out.push('\n');
    let _ = writeln!(out, "Duplicate rows in the table: {}", report.duplicate_rows);
    out.push('\n');

    let _ = writeln!(
        out,
        "Preview ({} rows, whitespace trimmed):",
        report.preview.rows.len()
    );
    out.push_str(&render_preview(&report.preview));
    out.push('\n');

    let summary = PreviewTable {
        columns: ["column", "null %", "duplicates", "duplicate %"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        rows: report
            .summary
            .iter()
            .map(|row| {
                vec![
                    Some(row.column.clone()),
                    Some(format!("{:.2}", row.null_percentage)),
                    Some(row.duplicate_rows.to_string()),
                    Some(format!("{:.2}", row.duplicate_percentage)),
                ]
            })
            .collect(),
    };
    out.push_str("Final results:\n");
    out.push_str(&render_preview(&summary));

    out
}

/// Render a small table with left-aligned, width-fitted columns.
pub fn render_preview(table: &PreviewTable) -> String {
    let mut widths: Vec<usize> = table
        .columns
        .iter()
        .map(|name| display_width(name))
        .collect();
    for row in &table.rows {
        for (i, cell) in row.iter().enumerate() {
            let len = display_width(cell.as_deref().unwrap_or(NULL_CELL));
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(len);
            }
        }
    }
    for width in &mut widths {
        *width = (*width).min(MAX_CELL_WIDTH);
    }

    let mut out = String::new();
    let header: Vec<&str> = table.columns.iter().map(String::as_str).collect();
    push_row(&mut out, header.iter().copied(), &widths);
    let rule_len = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    let _ = writeln!(out, "{}", "-".repeat(rule_len));
    for row in &table.rows {
        push_row(
            &mut out,
            row.iter().map(|cell| cell.as_deref().unwrap_or(NULL_CELL)),
            &widths,
        );
    }
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| {
            let cell = truncate_str(cell, width);
            let pad = width.saturating_sub(display_width(&cell));
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    let _ = writeln!(out, "{}", line.join("  ").trim_end());
}

pub fn render_dates(verification: &DateVerification) -> String {
    let mut out = String::new();

    if verification.date_columns.is_empty() {
        out.push_str("No date columns found in the table.\n");
    } else {
        out.push_str("Date columns detected:\n");
        let _ = writeln!(out, "  {}", verification.date_columns.join(", "));
    }

    if !verification.format_errors.is_empty() {
        out.push_str("\nFormat errors in dates:\n");
        for error in &verification.format_errors {
            let _ = writeln!(out, "  {}", error);
        }
    }

    if !verification.range_errors.is_empty() {
        out.push_str("\nRange errors in dates:\n");
        for error in &verification.range_errors {
            let _ = writeln!(out, "  {}", error);
        }
    }

    if verification.is_clean() {
        out.push_str("\nNo errors found in the date columns.\n");
    }

    out
}

pub fn render_quality(quality: &QualityScore) -> String {
    format!(
        "Overall file quality: {:.2}\n{}\n",
        quality.score, quality.verdict
    )
}

fn display_width(s: &str) -> usize {
    s.chars().count()
}

/// Truncate a string to `max_len` characters with an ellipsis.
fn truncate_str(s: &str, max_len: usize) -> String {
    if display_width(s) <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
