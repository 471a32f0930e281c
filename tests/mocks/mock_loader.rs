use asesor_processor::error::{MalformedRow, PipelineError, PipelineResult};
use asesor_processor::models::Advisor;
use asesor_processor::repositories::{AdvisorLoader, LoadedRecords};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock advisor loader for testing.
///
/// Returns the configured records for any source, or a configured I/O
/// failure, and remembers which sources were requested.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockAdvisorLoader {
    records: Arc<Mutex<Vec<Advisor>>>,
    malformed: Arc<Mutex<Vec<MalformedRow>>>,
    fail_with: Arc<Mutex<Option<io::ErrorKind>>>,
    requested: Arc<Mutex<Vec<PathBuf>>>,
}

#[allow(dead_code)]
impl MockAdvisorLoader {
    /// Create a loader with no records.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader that returns `records`.
    pub fn with_records(records: Vec<Advisor>) -> Self {
        let loader = Self::new();
        *loader.records.lock().unwrap() = records;
        loader
    }

    /// Report a malformed row alongside the records.
    pub fn add_malformed(&self, row: MalformedRow) {
        self.malformed.lock().unwrap().push(row);
    }

    /// Make every subsequent load fail with an I/O error of `kind`.
    pub fn fail_with(&self, kind: io::ErrorKind) {
        *self.fail_with.lock().unwrap() = Some(kind);
    }

    /// Number of times `load_records` was called.
    pub fn call_count(&self) -> usize {
        self.requested.lock().unwrap().len()
    }

    /// Sources passed to `load_records`, in call order.
    pub fn requested_sources(&self) -> Vec<PathBuf> {
        self.requested.lock().unwrap().clone()
    }
}

impl AdvisorLoader for MockAdvisorLoader {
    fn load_records(&self, source: &Path) -> PipelineResult<LoadedRecords> {
        self.requested.lock().unwrap().push(source.to_path_buf());

        if let Some(kind) = *self.fail_with.lock().unwrap() {
            return Err(PipelineError::Io {
                path: source.to_path_buf(),
                source: io::Error::new(kind, "mock load failure"),
            });
        }

        Ok(LoadedRecords {
            records: self.records.lock().unwrap().clone(),
            malformed: self.malformed.lock().unwrap().clone(),
        })
    }
}
