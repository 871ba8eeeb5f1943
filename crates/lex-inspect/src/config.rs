//! Configuration types for loading and inspecting tables.
//!
//! Options are set through [`InspectConfig::builder()`]; the quality
//! thresholds are fixed and live in [`crate::quality`].

use serde::{Deserialize, Serialize};

/// Markers read as missing values, besides empty fields.
pub const DEFAULT_NULL_VALUES: [&str; 17] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "null",
];

/// Configuration for loading and inspecting a table.
///
/// # Example
///
/// ```rust,ignore
/// use lex_inspect::config::InspectConfig;
///
/// let config = InspectConfig::builder()
///     .delimiter(b',')
///     .preview_rows(10)
///     .build()?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectConfig {
    /// Field separator of the input files.
    /// Default: `;`
    pub delimiter: u8,

    /// Number of rows shown in the trimmed preview.
    /// Default: 5
    pub preview_rows: usize,

    /// Number of rows polars reads to infer the schema.
    /// `None` scans the whole file, so a column that changes type late
    /// is read as text instead of failing the load.
    /// Default: None
    pub infer_schema_length: Option<usize>,

    /// Tokens read as null in every column.
    /// Default: [`DEFAULT_NULL_VALUES`]
    pub null_values: Vec<String>,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            delimiter: b';',
            preview_rows: 5,
            infer_schema_length: None,
            null_values: DEFAULT_NULL_VALUES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl InspectConfig {
    /// Create a new configuration builder.
    pub fn builder() -> InspectConfigBuilder {
        InspectConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !self.delimiter.is_ascii() || matches!(self.delimiter, b'"' | b'\n' | b'\r') {
            return Err(ConfigValidationError::InvalidDelimiter(
                self.delimiter as char,
            ));
        }

        if self.preview_rows == 0 {
            return Err(ConfigValidationError::InvalidPreviewRows(self.preview_rows));
        }

        if self.infer_schema_length == Some(0) {
            return Err(ConfigValidationError::InvalidSchemaLength);
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid delimiter {0:?} (must be a single ASCII character other than a quote or newline)")]
    InvalidDelimiter(char),

    #[error("Invalid preview rows: {0} (must be at least 1)")]
    InvalidPreviewRows(usize),

    #[error("Invalid schema inference length: 0 (use None to scan the whole file)")]
    InvalidSchemaLength,
}

/// Builder for [`InspectConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct InspectConfigBuilder {
    delimiter: Option<u8>,
    preview_rows: Option<usize>,
    infer_schema_length: Option<Option<usize>>,
    null_values: Option<Vec<String>>,
}

impl InspectConfigBuilder {
    /// Set the field separator.
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Set how many rows the trimmed preview shows.
    pub fn preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = Some(rows);
        self
    }

    /// Set the schema inference window. `None` scans the whole file.
    pub fn infer_schema_length(mut self, rows: Option<usize>) -> Self {
        self.infer_schema_length = Some(rows);
        self
    }

    /// Replace the null markers.
    pub fn null_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.null_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `InspectConfig` or an error if validation fails.
    pub fn build(self) -> Result<InspectConfig, ConfigValidationError> {
        let defaults = InspectConfig::default();
        let config = InspectConfig {
            delimiter: self.delimiter.unwrap_or(defaults.delimiter),
            preview_rows: self.preview_rows.unwrap_or(defaults.preview_rows),
            infer_schema_length: self
                .infer_schema_length
                .unwrap_or(defaults.infer_schema_length),
            null_values: self.null_values.unwrap_or(defaults.null_values),
        };

        config.validate()?;
        Ok(config)
    }
}
