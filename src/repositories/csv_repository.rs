//! CSV adapter for both loading and writing advisor records.

use super::row::{parse_row, to_cells};
use super::staging::write_atomically;
use super::traits::{AdvisorLoader, AdvisorWriter, LoadedRecords};
use crate::error::{MalformedRow, PipelineError, PipelineResult};
use crate::models::{Advisor, COLUMN_HEADERS};
use std::fs::File;
use std::path::Path;
use tracing::{debug, info, warn};

/// Reads and writes advisor CSV files with a header row.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvAdvisorRepository;

impl CsvAdvisorRepository {
    pub fn new() -> Self {
        Self
    }
}

impl AdvisorLoader for CsvAdvisorRepository {
    fn load_records(&self, source: &Path) -> PipelineResult<LoadedRecords> {
        info!(path = %source.display(), "Reading advisors from CSV");

        let file = File::open(source).map_err(|e| PipelineError::io(source, e))?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let mut loaded = LoadedRecords::default();

        for (index, result) in reader.records().enumerate() {
            // Row 0 is the header
            let row = index + 1;

            let record = match result {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(PipelineError::csv(source, e)),
                Err(e) => {
                    let malformed = MalformedRow::new(row, e.to_string());
                    warn!(path = %source.display(), %malformed, "Skipping unreadable row");
                    loaded.malformed.push(malformed);
                    continue;
                }
            };

            let cells: Vec<String> = record.iter().map(str::to_string).collect();
            match parse_row(row, &cells) {
                Ok(Some(advisor)) => {
                    debug!(row, id = ?advisor.id, "Advisor read");
                    loaded.records.push(advisor);
                }
                Ok(None) => {}
                Err(malformed) => {
                    warn!(path = %source.display(), %malformed, "Skipping malformed row");
                    loaded.malformed.push(malformed);
                }
            }
        }

        info!(
            path = %source.display(),
            records = loaded.records.len(),
            malformed = loaded.malformed.len(),
            "CSV read complete"
        );
        Ok(loaded)
    }
}

impl AdvisorWriter for CsvAdvisorRepository {
    fn write_records(&self, records: &[Advisor], destination: &Path) -> PipelineResult<()> {
        info!(
            path = %destination.display(),
            records = records.len(),
            "Writing advisors to CSV"
        );

        write_atomically(destination, |file| {
            let mut writer = csv::Writer::from_writer(file);
            writer
                .write_record(COLUMN_HEADERS)
                .map_err(|e| PipelineError::csv(destination, e))?;
            for advisor in records {
                writer
                    .write_record(to_cells(advisor))
                    .map_err(|e| PipelineError::csv(destination, e))?;
            }
            writer
                .flush()
                .map_err(|e| PipelineError::io(destination, e))
        })?;

        info!(path = %destination.display(), "CSV written");
        Ok(())
    }
}
