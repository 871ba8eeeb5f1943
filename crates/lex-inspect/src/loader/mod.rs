//! Loading delimited text files into tables.
//!
//! The loader reads each requested source with polars, reinterprets
//! strict `YYYY-MM-DD` columns as dates, and hands back the table of the
//! last source that loaded. Missing or unreadable sources are skipped with
//! a warning.

mod dates;

pub use dates::{parse_strict_date, reinterpret_date_columns, try_reinterpret_as_date};
pub(crate) use dates::UNIX_EPOCH_DAYS_FROM_CE;

use crate::config::InspectConfig;
use crate::error::{InspectionError, Result, ResultExt};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, warn};

/// A logical name paired with the path it should be read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSource {
    pub name: String,
    pub path: PathBuf,
}

impl FileSource {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Parses `NAME=PATH`. A bare path uses its file stem as the name.
impl FromStr for FileSource {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("source must not be empty".to_string());
        }

        match s.split_once('=') {
            Some((name, path)) => {
                let (name, path) = (name.trim(), path.trim());
                if name.is_empty() || path.is_empty() {
                    return Err(format!("expected NAME=PATH, got '{}'", s));
                }
                Ok(Self::new(name, path))
            }
            None => {
                let name = Path::new(s)
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .unwrap_or(s)
                    .to_string();
                Ok(Self::new(name, s))
            }
        }
    }
}

/// A table together with the source it was read from.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub source: FileSource,
    pub data: DataFrame,
    /// Columns the loader reinterpreted as dates.
    pub date_columns: Vec<String>,
}

/// Reads delimited text files according to an [`InspectConfig`].
#[derive(Debug, Clone, Default)]
pub struct DataLoader {
    config: InspectConfig,
}

impl DataLoader {
    pub fn new(config: InspectConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InspectConfig {
        &self.config
    }

    /// Load every source in order and return the last one that loaded.
    ///
    /// Sources whose path does not exist, or whose content cannot be
    /// parsed, are reported with a warning and skipped.
    pub fn load_sources(&self, sources: &[FileSource]) -> Result<LoadedTable> {
        let mut last = None;

        for source in sources {
            if !source.path.exists() {
                warn!(
                    "File '{}' does not exist at path {}",
                    source.name,
                    source.path.display()
                );
                continue;
            }

            match self.load_source(source) {
                Ok(table) => last = Some(table),
                Err(e) => warn!("Skipping file '{}': {}", source.name, e),
            }
        }

        last.ok_or(InspectionError::NoDataLoaded)
    }

    /// Load a single existing source.
    pub fn load_source(&self, source: &FileSource) -> Result<LoadedTable> {
        info!("Loading '{}' from: {}", source.name, source.path.display());

        let raw = self
            .read_path(&source.path)
            .context(format!("Failed to read '{}'", source.path.display()))?;
        let (data, date_columns) = reinterpret_date_columns(raw)?;

        info!("'{}' loaded: {:?}", source.name, data.shape());
        if !date_columns.is_empty() {
            debug!("Date columns: {:?}", date_columns);
        }

        Ok(LoadedTable {
            source: source.clone(),
            data,
            date_columns,
        })
    }

    /// Parse in-memory delimited text, including date reinterpretation.
    pub fn parse_str(&self, content: &str) -> Result<DataFrame> {
        let raw = self
            .read_options()
            .into_reader_with_file_handle(Cursor::new(content.as_bytes().to_vec()))
            .finish()?;
        let (data, _) = reinterpret_date_columns(raw)?;
        Ok(data)
    }

    fn read_path(&self, path: &Path) -> PolarsResult<DataFrame> {
        self.read_options()
            .try_into_reader_with_file_path(Some(path.to_path_buf()))?
            .finish()
    }

    fn read_options(&self) -> CsvReadOptions {
        let null_values = NullValues::AllColumns(
            self.config
                .null_values
                .iter()
                .map(|v| v.as_str().into())
                .collect(),
        );

        CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(self.config.infer_schema_length)
            .with_parse_options(
                CsvParseOptions::default()
                    .with_separator(self.config.delimiter)
                    .with_quote_char(Some(b'"'))
                    .with_null_values(Some(null_values)),
            )
    }
}
