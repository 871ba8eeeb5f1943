//! Custom error types for the inspection pipeline.
//!
//! This module provides the error hierarchy using `thiserror`. Errors are
//! serializable so they can be embedded in JSON output alongside reports.

use serde::Serialize;
use serde::ser::SerializeStruct;
use thiserror::Error;

/// The main error type for loading and inspecting tables.
#[derive(Error, Debug)]
pub enum InspectionError {
    /// None of the requested sources could be loaded.
    #[error("No data loaded")]
    NoDataLoaded,

    /// The table has no rows (or no cells), so percentages are undefined.
    #[error("Table is empty: {0}")]
    EmptyTable(String),

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] crate::config::ConfigValidationError),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<InspectionError>,
    },
}

impl InspectionError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        InspectionError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Stable error code, preserved through added context.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NoDataLoaded => "NO_DATA_LOADED",
            Self::EmptyTable(_) => "EMPTY_TABLE",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::Io(_) => "IO_ERROR",
            Self::Polars(_) => "POLARS_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }

    /// Check if this error means there was nothing to inspect.
    pub fn is_missing_data(&self) -> bool {
        match self {
            Self::NoDataLoaded | Self::EmptyTable(_) => true,
            Self::WithContext { source, .. } => source.is_missing_data(),
            _ => false,
        }
    }
}

/// Errors are serialized as a struct with `code` and `message` fields.
impl Serialize for InspectionError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("InspectionError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for inspection operations.
pub type Result<T> = std::result::Result<T, InspectionError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| InspectionError::Polars(e).with_context(context))
    }
}
