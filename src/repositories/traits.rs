use crate::error::{MalformedRow, PipelineResult};
use crate::models::Advisor;
use std::path::Path;

/// Records read from a source, plus the rows that had to be skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedRecords {
    /// Records in source order
    pub records: Vec<Advisor>,

    /// Rows that could not be parsed into a record
    pub malformed: Vec<MalformedRow>,
}

impl LoadedRecords {
    pub fn new(records: Vec<Advisor>) -> Self {
        Self {
            records,
            malformed: Vec::new(),
        }
    }
}

/// Source of raw advisor records.
///
/// Implementations skip individually malformed rows (reporting them in
/// `LoadedRecords::malformed`) and only fail when the source as a whole
/// cannot be read.
pub trait AdvisorLoader: Send + Sync {
    /// Read every record from `source`.
    fn load_records(&self, source: &Path) -> PipelineResult<LoadedRecords>;
}

/// Destination for cleaned advisor records.
///
/// Implementations create or overwrite `destination` and keep the
/// canonical column order.
pub trait AdvisorWriter: Send + Sync {
    /// Write `records` to `destination`.
    fn write_records(&self, records: &[Advisor], destination: &Path) -> PipelineResult<()>;
}
