//! Error types for the advisor processor.
//!
//! Field-level problems are `domain::ValidationError` values and never abort a
//! run. The types here cover the load/write boundary, configuration, and rows
//! the loader could not turn into a record.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a pipeline run.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Filesystem access failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV reading or writing failed
    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Workbook could not be opened or read
    #[error("spreadsheet error in {path}: {source}")]
    Spreadsheet {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// Workbook could not be built or saved
    #[error("workbook write error in {path}: {source}")]
    WorkbookWrite {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },

    /// File extension is not handled by any adapter
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(PathBuf),

    /// Workbook contains no worksheets
    #[error("workbook has no sheets: {0}")]
    EmptyWorkbook(PathBuf),

    /// Report serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PipelineError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}

/// A raw row that could not be parsed into a record.
///
/// The loader reports and skips these; they do not abort the run.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("row {row}: {reason}")]
pub struct MalformedRow {
    /// Zero-based row index in the source, header included
    pub row: usize,

    /// Why the row was rejected
    pub reason: String,
}

impl MalformedRow {
    pub fn new(row: usize, reason: impl Into<String>) -> Self {
        Self {
            row,
            reason: reason.into(),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with PipelineError
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
