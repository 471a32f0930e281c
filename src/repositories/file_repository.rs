//! Extension-based dispatch between the file adapters.

use super::csv_repository::CsvAdvisorRepository;
use super::traits::{AdvisorLoader, AdvisorWriter, LoadedRecords};
use super::workbook_repository::{WorkbookAdvisorLoader, WorkbookAdvisorWriter};
use crate::error::{PipelineError, PipelineResult};
use crate::models::Advisor;
use std::path::Path;

/// Supported file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Workbook,
}

impl FileFormat {
    /// Detect the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(Self::Csv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(Self::Workbook),
            _ => None,
        }
    }

    /// Whether records can be written in this format at `path`.
    ///
    /// Every workbook extension loads, but only `.xlsx` is written.
    pub fn is_writable(path: &Path) -> bool {
        match Self::from_path(path) {
            Some(Self::Csv) => true,
            Some(Self::Workbook) => path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("xlsx")),
            None => false,
        }
    }
}

/// Loads CSV or workbook files and writes CSV or `.xlsx` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileAdvisorRepository {
    csv: CsvAdvisorRepository,
    workbook_loader: WorkbookAdvisorLoader,
    workbook_writer: WorkbookAdvisorWriter,
}

impl FileAdvisorRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdvisorLoader for FileAdvisorRepository {
    fn load_records(&self, source: &Path) -> PipelineResult<LoadedRecords> {
        match FileFormat::from_path(source) {
            Some(FileFormat::Csv) => self.csv.load_records(source),
            Some(FileFormat::Workbook) => self.workbook_loader.load_records(source),
            None => Err(PipelineError::UnsupportedFormat(source.to_path_buf())),
        }
    }
}

impl AdvisorWriter for FileAdvisorRepository {
    fn write_records(&self, records: &[Advisor], destination: &Path) -> PipelineResult<()> {
        if !FileFormat::is_writable(destination) {
            return Err(PipelineError::UnsupportedFormat(destination.to_path_buf()));
        }
        match FileFormat::from_path(destination) {
            Some(FileFormat::Workbook) => self.workbook_writer.write_records(records, destination),
            _ => self.csv.write_records(records, destination),
        }
    }
}
