//! Counters and stage timings for pipeline runs.

use crate::error::PipelineError;
use crate::observability::PipelineObserver;
use crate::pipeline::{PipelineState, RejectedRecord, RunReport};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

const STAGE_COUNT: usize = PipelineState::STAGES.len();

/// Metrics collector fed by pipeline events.
///
/// Clones share the same counters, so one clone can be registered as an
/// observer while another is kept for reading.
#[derive(Debug, Clone)]
pub struct PipelineMetrics {
    /// Runs that produced a report
    runs_completed: Arc<AtomicU64>,

    /// Runs that ended in failure
    runs_failed: Arc<AtomicU64>,

    /// Records loaded across all runs
    records_loaded: Arc<AtomicU64>,

    /// Records that passed validation
    records_valid: Arc<AtomicU64>,

    /// Records rejected by validation
    records_rejected: Arc<AtomicU64>,

    /// Rows skipped by loaders
    malformed_rows: Arc<AtomicU64>,

    /// Accumulated milliseconds per working stage, indexed like `PipelineState::STAGES`
    stage_duration_ms: Arc<[AtomicU64; STAGE_COUNT]>,
}

impl Default for PipelineMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineMetrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            runs_completed: Arc::new(AtomicU64::new(0)),
            runs_failed: Arc::new(AtomicU64::new(0)),
            records_loaded: Arc::new(AtomicU64::new(0)),
            records_valid: Arc::new(AtomicU64::new(0)),
            records_rejected: Arc::new(AtomicU64::new(0)),
            malformed_rows: Arc::new(AtomicU64::new(0)),
            stage_duration_ms: Arc::new(Default::default()),
        }
    }

    pub fn runs_completed(&self) -> u64 {
        self.runs_completed.load(Ordering::Relaxed)
    }

    pub fn runs_failed(&self) -> u64 {
        self.runs_failed.load(Ordering::Relaxed)
    }

    pub fn records_loaded(&self) -> u64 {
        self.records_loaded.load(Ordering::Relaxed)
    }

    pub fn records_valid(&self) -> u64 {
        self.records_valid.load(Ordering::Relaxed)
    }

    pub fn records_rejected(&self) -> u64 {
        self.records_rejected.load(Ordering::Relaxed)
    }

    pub fn malformed_rows(&self) -> u64 {
        self.malformed_rows.load(Ordering::Relaxed)
    }

    /// Accumulated milliseconds spent in `stage`; zero for non-working states.
    pub fn stage_duration_ms(&self, stage: PipelineState) -> u64 {
        stage
            .stage_index()
            .map_or(0, |i| self.stage_duration_ms[i].load(Ordering::Relaxed))
    }

    /// Total milliseconds across all stages.
    pub fn total_duration_ms(&self) -> u64 {
        PipelineState::STAGES
            .iter()
            .map(|stage| self.stage_duration_ms(*stage))
            .sum()
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            runs_completed: self.runs_completed(),
            runs_failed: self.runs_failed(),
            records_loaded: self.records_loaded(),
            records_valid: self.records_valid(),
            records_rejected: self.records_rejected(),
            malformed_rows: self.malformed_rows(),
            stage_duration_ms: PipelineState::STAGES
                .iter()
                .map(|stage| (*stage, self.stage_duration_ms(*stage)))
                .collect(),
            total_duration_ms: self.total_duration_ms(),
        }
    }
}

impl PipelineObserver for PipelineMetrics {
    fn stage_finished(&self, stage: PipelineState, elapsed: Duration) {
        if let Some(i) = stage.stage_index() {
            self.stage_duration_ms[i].fetch_add(elapsed.as_millis() as u64, Ordering::Relaxed);
        }
    }

    fn record_rejected(&self, _rejected: &RejectedRecord) {
        self.records_rejected.fetch_add(1, Ordering::Relaxed);
    }

    fn run_failed(&self, _stage: PipelineState, _error: &PipelineError) {
        self.runs_failed.fetch_add(1, Ordering::Relaxed);
    }

    fn report_ready(&self, report: &RunReport) {
        self.runs_completed.fetch_add(1, Ordering::Relaxed);
        self.records_loaded
            .fetch_add(report.total_count as u64, Ordering::Relaxed);
        self.records_valid
            .fetch_add(report.valid_count as u64, Ordering::Relaxed);
        self.malformed_rows
            .fetch_add(report.malformed_rows.len() as u64, Ordering::Relaxed);
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone)]
pub struct MetricsSummary {
    pub runs_completed: u64,
    pub runs_failed: u64,
    pub records_loaded: u64,
    pub records_valid: u64,
    pub records_rejected: u64,
    pub malformed_rows: u64,
    pub stage_duration_ms: Vec<(PipelineState, u64)>,
    pub total_duration_ms: u64,
}
