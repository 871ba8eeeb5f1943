//! Integration tests for the inspection pipeline.
//!
//! These tests load the CSV fixtures from disk and check the four reports
//! end to end.

use lex_inspect::reporting::{render_report, report_to_json};
use lex_inspect::{
    CharacterCounts, DataLoader, FileSource, InspectConfig, InspectionError, Inspector,
    QualityVerdict,
};
use polars::prelude::*;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn source(name: &str, filename: &str) -> FileSource {
    FileSource::new(name, fixtures_path().join(filename))
}

// ============================================================================
// Loader Tests
// ============================================================================

#[test]
fn test_loader_detects_strict_date_columns() {
    let table = DataLoader::default()
        .load_sources(&[source("ventas", "ventas.csv")])
        .expect("ventas.csv should load");

    assert_eq!(table.data.shape(), (5, 4));
    assert_eq!(table.date_columns, vec!["fecha".to_string()]);
    assert_eq!(table.data.column("fecha").unwrap().dtype(), &DataType::Date);
    assert_eq!(table.data.column("cliente").unwrap().dtype(), &DataType::String);
    assert_eq!(table.data.column("monto").unwrap().dtype(), &DataType::Float64);
}

#[test]
fn test_loader_keeps_mixed_date_column_as_text() {
    let table = DataLoader::default()
        .load_sources(&[source("sin_fechas", "sin_fechas.csv")])
        .unwrap();

    assert!(table.date_columns.is_empty());
    assert_eq!(
        table.data.column("fecha_texto").unwrap().dtype(),
        &DataType::String
    );
}

#[test]
fn test_loader_custom_delimiter() {
    let config = InspectConfig::builder().delimiter(b',').build().unwrap();
    let table = DataLoader::new(config)
        .load_sources(&[source("comas", "comas.csv")])
        .unwrap();

    assert_eq!(table.data.shape(), (2, 2));
    assert_eq!(table.data.column("score").unwrap().null_count(), 1);
}

#[test]
fn test_loader_type_change_after_first_hundred_rows() {
    let table = DataLoader::default()
        .load_sources(&[source("codigos", "codigos_tardios.csv")])
        .expect("full-file schema inference should load the file");

    assert_eq!(table.data.shape(), (151, 2));
    assert_eq!(table.data.column("codigo").unwrap().dtype(), &DataType::String);
    assert_eq!(table.data.column("id").unwrap().dtype(), &DataType::Int64);
}

#[test]
fn test_loader_narrow_schema_window_skips_file() {
    let config = InspectConfig::builder()
        .infer_schema_length(Some(100))
        .build()
        .unwrap();
    let err = DataLoader::new(config)
        .load_sources(&[source("codigos", "codigos_tardios.csv")])
        .unwrap_err();

    assert!(matches!(err, InspectionError::NoDataLoaded));
}

// ============================================================================
// Full Inspection Tests
// ============================================================================

#[test]
fn test_inspection_of_ventas() {
    let report = Inspector::default()
        .inspect_sources(&[source("ventas", "ventas.csv")])
        .expect("inspection should succeed");

    assert_eq!(report.source_name, "ventas");
    assert_eq!((report.rows, report.columns), (5, 4));

    // cliente: 14 uppercase / 31 letters, ciudad: 5 / 26
    assert_eq!(report.characters, CharacterCounts::new(19, 57));

    let descriptive = &report.descriptive;
    let nulls: Vec<(&str, usize)> = descriptive
        .null_counts
        .iter()
        .map(|n| (n.column.as_str(), n.null_count))
        .collect();
    assert_eq!(
        nulls,
        vec![("fecha", 0), ("cliente", 0), ("ciudad", 0), ("monto", 1)]
    );
    assert_eq!(descriptive.duplicate_rows, 1);
    assert_eq!(descriptive.duplicate_percentage, 20.0);
    assert_eq!(descriptive.preview.rows.len(), 5);
    assert_eq!(descriptive.preview.rows[0][2], Some("Lima".to_string()));
    assert_eq!(descriptive.preview.rows[1][3], None);
    assert_eq!(descriptive.preview.rows[0][0], Some("2023-01-05".to_string()));

    assert_eq!(report.dates.date_columns, vec!["fecha".to_string()]);
    assert!(report.dates.is_clean());

    // 1 null and 1 duplicate row over 20 cells: 10 - 2.5 - 2.5
    assert_eq!(report.quality.null_percentage, 5.0);
    assert_eq!(report.quality.duplicate_percentage, 5.0);
    assert_eq!(report.quality.score, 5.0);
    assert_eq!(report.quality.verdict, QualityVerdict::Acceptable);
}

#[test]
fn test_inspection_four_rows_one_date_column_one_null() {
    let report = Inspector::default()
        .inspect_sources(&[source("fechas", "fechas_nulo.csv")])
        .unwrap();

    assert_eq!((report.rows, report.columns), (4, 2));
    assert_eq!(report.dates.date_columns, vec!["fecha".to_string()]);
    assert_eq!(report.quality.total_nulls, 1);
    assert_eq!(report.descriptive.duplicate_rows, 0);
    assert_eq!(report.characters, CharacterCounts::new(0, 0));
    assert!(report.quality.score < 10.0);
}

#[test]
fn test_inspection_counts_letter_categories_only() {
    let report = Inspector::default()
        .inspect_sources(&[source("letras", "letras.csv")])
        .unwrap();

    // circled A and roman numeral twelve are uppercase but not letters,
    // the Devanagari vowel sign is a mark
    assert_eq!(report.characters, CharacterCounts::new(3, 6));
}

#[test]
fn test_inspection_skips_missing_file() {
    let report = Inspector::default()
        .inspect_sources(&[
            source("ventas", "ventas.csv"),
            source("fantasma", "no_such_file.csv"),
        ])
        .unwrap();

    assert_eq!(report.source_name, "ventas");
}

#[test]
fn test_inspection_nothing_loaded() {
    let err = Inspector::default()
        .inspect_sources(&[source("fantasma", "no_such_file.csv")])
        .unwrap_err();

    assert!(matches!(err, InspectionError::NoDataLoaded));
    assert_eq!(err.error_code(), "NO_DATA_LOADED");
}

#[test]
fn test_inspection_header_only_file() {
    let err = Inspector::default()
        .inspect_sources(&[source("vacio", "solo_encabezado.csv")])
        .unwrap_err();

    assert!(err.is_missing_data(), "unexpected error: {}", err);
}

// ============================================================================
// Output Tests
// ============================================================================

#[test]
fn test_text_report_block_order() {
    let report = Inspector::default()
        .inspect_sources(&[source("ventas", "ventas.csv")])
        .unwrap();
    let text = render_report(&report);

    let positions: Vec<usize> = [
        "Character analysis for ventas",
        "Descriptive analysis for ventas",
        "Date column verification",
        "Quality evaluation",
    ]
    .iter()
    .map(|heading| text.find(heading).expect("missing heading"))
    .collect();

    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(text.contains("Overall file quality: 5.00"));
    assert!(text.contains(QualityVerdict::Acceptable.message()));
    assert!(text.contains("No errors found in the date columns."));
}

#[test]
fn test_json_report() {
    let report = Inspector::default()
        .inspect_sources(&[source("ventas", "ventas.csv")])
        .unwrap();
    let json = report_to_json(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["source_name"], "ventas");
    assert_eq!(value["characters"]["uppercase"], 19);
    assert_eq!(value["quality"]["verdict"], "acceptable");
    assert_eq!(value["dates"]["date_columns"][0], "fecha");
}
