//! Inspection pipeline.
//!
//! Runs the four passes over one loaded table, always in the same order,
//! and collects their results into an [`InspectionReport`].

use crate::analysis::{analyze_characters, analyze_descriptive, verify_date_columns};
use crate::config::InspectConfig;
use crate::error::{InspectionError, Result, ResultExt};
use crate::loader::{DataLoader, FileSource, LoadedTable};
use crate::quality::QualityScorer;
use crate::types::InspectionReport;
use polars::prelude::*;
use tracing::info;

/// The passes of an inspection, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectionStage {
    Characters,
    Descriptive,
    Dates,
    Quality,
}

impl InspectionStage {
    pub const ALL: [InspectionStage; 4] = [
        InspectionStage::Characters,
        InspectionStage::Descriptive,
        InspectionStage::Dates,
        InspectionStage::Quality,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Characters => "Character analysis",
            Self::Descriptive => "Descriptive analysis",
            Self::Dates => "Date column verification",
            Self::Quality => "Quality evaluation",
        }
    }

    /// 1-based position, for "[n/4]" style progress lines.
    pub fn position(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0) + 1
    }
}

/// Loads sources and runs every pass over the resulting table.
#[derive(Debug, Clone, Default)]
pub struct Inspector {
    loader: DataLoader,
}

static_assertions::assert_impl_all!(Inspector: Send, Sync);

impl Inspector {
    pub fn new(config: InspectConfig) -> Self {
        Self {
            loader: DataLoader::new(config),
        }
    }

    pub fn config(&self) -> &InspectConfig {
        self.loader.config()
    }

    /// Load the sources and inspect the last one that loaded.
    pub fn inspect_sources(&self, sources: &[FileSource]) -> Result<InspectionReport> {
        let table = self.loader.load_sources(sources)?;
        self.inspect_table(&table)
    }

    /// Inspect an already loaded table.
    pub fn inspect_table(&self, table: &LoadedTable) -> Result<InspectionReport> {
        self.inspect_frame(&table.source, &table.data)
            .context(format!("Inspecting '{}'", table.source.name))
    }

    /// Run the four passes over a frame.
    pub fn inspect_frame(&self, source: &FileSource, df: &DataFrame) -> Result<InspectionReport> {
        if df.height() == 0 {
            return Err(InspectionError::EmptyTable(format!(
                "'{}' has a header but no rows",
                source.name
            )));
        }

        log_stage(InspectionStage::Characters);
        let characters = analyze_characters(df)?;

        log_stage(InspectionStage::Descriptive);
        let descriptive = analyze_descriptive(df, self.config().preview_rows)?;

        log_stage(InspectionStage::Dates);
        let dates = verify_date_columns(df)?;

        log_stage(InspectionStage::Quality);
        let quality = QualityScorer::evaluate(df)?;

        Ok(InspectionReport {
            source_name: source.name.clone(),
            source_path: source.path.display().to_string(),
            rows: df.height(),
            columns: df.width(),
            characters,
            descriptive,
            dates,
            quality,
        })
    }
}

fn log_stage(stage: InspectionStage) {
    info!(
        "[{}/{}] {}",
        stage.position(),
        InspectionStage::ALL.len(),
        stage.display_name()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CharacterCounts, QualityVerdict};

    #[test]
    fn test_stage_order() {
        assert_eq!(InspectionStage::Characters.position(), 1);
        assert_eq!(InspectionStage::Quality.position(), 4);
    }

    #[test]
    fn test_inspect_frame() {
        let loader = DataLoader::default();
        let df = loader
            .parse_str(
                "fecha;nombre\n2023-01-01;Ana\n2023-01-02;\n2023-01-03;Luis\n2023-01-04;Eva\n",
            )
            .unwrap();
        let source = FileSource::new("clientes", "clientes.csv");

        let report = Inspector::default().inspect_frame(&source, &df).unwrap();

        assert_eq!(report.source_name, "clientes");
        assert_eq!((report.rows, report.columns), (4, 2));
        assert_eq!(report.characters, CharacterCounts::new(3, 10));
        assert_eq!(report.descriptive.null_counts[1].null_count, 1);
        assert_eq!(report.dates.date_columns, vec!["fecha"]);
        // 1 null over 8 cells
        assert_eq!(report.quality.score, 3.75);
        assert_eq!(report.quality.verdict, QualityVerdict::NeedsCleanup);
    }

    #[test]
    fn test_inspect_frame_without_rows() {
        let df = df!("a" => Vec::<i32>::new()).unwrap();
        let source = FileSource::new("vacio", "vacio.csv");

        let err = Inspector::default().inspect_frame(&source, &df).unwrap_err();
        assert!(matches!(err, InspectionError::EmptyTable(_)));
    }
}
