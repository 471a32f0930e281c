//! Pipeline observer interface and its tracing implementation.

use crate::error::PipelineError;
use crate::pipeline::{PipelineState, RejectedRecord, RunOutcome, RunReport};
use std::time::Duration;

/// Receives lifecycle events from a pipeline run.
///
/// Every method has an empty default so implementations only handle the
/// events they care about. Observers must not influence the run.
pub trait PipelineObserver: Send + Sync {
    /// A working stage is about to start.
    fn stage_started(&self, _stage: PipelineState) {}

    /// A working stage completed successfully.
    fn stage_finished(&self, _stage: PipelineState, _elapsed: Duration) {}

    /// A record was excluded by validation.
    fn record_rejected(&self, _rejected: &RejectedRecord) {}

    /// The run stopped at `stage` because of `error`.
    fn run_failed(&self, _stage: PipelineState, _error: &PipelineError) {}

    /// The run finished (with or without output).
    fn report_ready(&self, _report: &RunReport) {}
}

/// Logs pipeline events through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TracingObserver {
    pub fn new() -> Self {
        Self
    }
}

impl PipelineObserver for TracingObserver {
    fn stage_started(&self, stage: PipelineState) {
        tracing::info!(stage = %stage, "Stage started");
    }

    fn stage_finished(&self, stage: PipelineState, elapsed: Duration) {
        tracing::info!(
            stage = %stage,
            duration_ms = elapsed.as_millis() as u64,
            "Stage finished"
        );
    }

    fn record_rejected(&self, rejected: &RejectedRecord) {
        tracing::warn!(
            id = ?rejected.id,
            errors = %rejected.messages().join(", "),
            "Advisor rejected"
        );
    }

    fn run_failed(&self, stage: PipelineState, error: &PipelineError) {
        tracing::error!(stage = %stage, error = %error, "Pipeline failed");
    }

    fn report_ready(&self, report: &RunReport) {
        if report.outcome == RunOutcome::NoRecords {
            tracing::warn!(source = %report.source.display(), "No advisors found in source");
            return;
        }

        tracing::info!(
            total = report.total_count,
            valid = report.valid_count,
            invalid = report.invalid_count(),
            malformed = report.malformed_rows.len(),
            "Validation complete"
        );

        if let Some(summary) = &report.summary {
            tracing::info!(
                total = summary.total_count,
                specialties = ?summary.distinct_specialties,
                "Summary"
            );
        }

        for stats in report.specialty_statistics.values() {
            tracing::info!(
                specialty = %stats.specialty,
                count = stats.count,
                distribution = ?stats.specialty_distribution,
                "Specialty statistics"
            );
        }
    }
}
