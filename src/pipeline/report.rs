//! Final report of a pipeline run.

use crate::domain::ValidationError;
use crate::error::{MalformedRow, PipelineError, PipelineResult};
use crate::models::Advisor;
use crate::services::{SpecialtyStats, Summary};
use indexmap::IndexMap;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A record excluded from the output because it failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedRecord {
    /// Id of the rejected record, if it had one
    pub id: Option<i64>,

    /// Violated rules, in validation order
    pub errors: Vec<ValidationError>,
}

impl RejectedRecord {
    /// Error messages in validation order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    /// Records were processed and written
    Completed,

    /// The source held no records; nothing was written
    NoRecords,
}

/// Everything a run produced besides the output file itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub outcome: RunOutcome,

    /// Where records were read from
    pub source: PathBuf,

    /// Where valid records were written, if anything was written
    pub output: Option<PathBuf>,

    /// Records loaded (malformed rows excluded)
    pub total_count: usize,

    /// Records that passed validation
    pub valid_count: usize,

    /// Rows the loader skipped
    pub malformed_rows: Vec<MalformedRow>,

    /// Records that failed validation
    pub rejected: Vec<RejectedRecord>,

    /// Dataset-wide summary of the valid records
    pub summary: Option<Summary>,

    /// Per-specialty statistics of the valid records
    pub specialty_statistics: IndexMap<String, SpecialtyStats>,

    /// The normalized, valid records
    #[serde(skip_serializing)]
    pub valid_records: Vec<Advisor>,
}

impl RunReport {
    pub(crate) fn no_records(source: &Path, malformed_rows: Vec<MalformedRow>) -> Self {
        Self {
            outcome: RunOutcome::NoRecords,
            source: source.to_path_buf(),
            output: None,
            total_count: 0,
            valid_count: 0,
            malformed_rows,
            rejected: Vec::new(),
            summary: None,
            specialty_statistics: IndexMap::new(),
            valid_records: Vec::new(),
        }
    }

    /// Number of records that failed validation.
    pub fn invalid_count(&self) -> usize {
        self.rejected.len()
    }

    /// Render the report as pretty-printed JSON.
    pub fn to_json(&self) -> PipelineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the JSON report to `path`, creating parent directories.
    pub fn write_json(&self, path: &Path) -> PipelineResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| PipelineError::io(parent, e))?;
        }
        fs::write(path, self.to_json()?).map_err(|e| PipelineError::io(path, e))
    }
}
