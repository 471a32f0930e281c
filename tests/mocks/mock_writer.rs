use asesor_processor::error::{PipelineError, PipelineResult};
use asesor_processor::models::Advisor;
use asesor_processor::repositories::AdvisorWriter;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock advisor writer for testing.
///
/// Captures every write in memory instead of touching the filesystem.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockAdvisorWriter {
    writes: Arc<Mutex<Vec<(PathBuf, Vec<Advisor>)>>>,
    fail_with: Arc<Mutex<Option<io::ErrorKind>>>,
}

#[allow(dead_code)]
impl MockAdvisorWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail with an I/O error of `kind`.
    pub fn fail_with(&self, kind: io::ErrorKind) {
        *self.fail_with.lock().unwrap() = Some(kind);
    }

    /// Number of times `write_records` was called, failed calls included.
    pub fn call_count(&self) -> usize {
        self.writes.lock().unwrap().len()
    }

    /// Records passed to the most recent write.
    pub fn last_written(&self) -> Option<Vec<Advisor>> {
        self.writes
            .lock()
            .unwrap()
            .last()
            .map(|(_, records)| records.clone())
    }

    /// Destination of the most recent write.
    pub fn last_destination(&self) -> Option<PathBuf> {
        self.writes
            .lock()
            .unwrap()
            .last()
            .map(|(path, _)| path.clone())
    }
}

impl AdvisorWriter for MockAdvisorWriter {
    fn write_records(&self, records: &[Advisor], destination: &Path) -> PipelineResult<()> {
        self.writes
            .lock()
            .unwrap()
            .push((destination.to_path_buf(), records.to_vec()));

        match *self.fail_with.lock().unwrap() {
            Some(kind) => Err(PipelineError::Io {
                path: destination.to_path_buf(),
                source: io::Error::new(kind, "mock write failure"),
            }),
            None => Ok(()),
        }
    }
}
