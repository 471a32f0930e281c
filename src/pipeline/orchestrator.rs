//! Runs the load, normalize, filter, aggregate and write stages in order.

use super::report::{RejectedRecord, RunOutcome, RunReport};
use super::state::PipelineState;
use crate::error::PipelineResult;
use crate::models::Advisor;
use crate::observability::PipelineObserver;
use crate::repositories::{AdvisorLoader, AdvisorWriter, LoadedRecords};
use crate::services::{AdvisorValidator, StatisticsService};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Advisor processing pipeline.
///
/// Storage is supplied through the loader and writer ports; everything else
/// is pure. Lifecycle events go to the registered observers.
pub struct AdvisorPipeline {
    loader: Box<dyn AdvisorLoader>,
    writer: Box<dyn AdvisorWriter>,
    validator: AdvisorValidator,
    statistics: StatisticsService,
    observers: Vec<Arc<dyn PipelineObserver>>,
    state: PipelineState,
}

impl AdvisorPipeline {
    pub fn new(loader: Box<dyn AdvisorLoader>, writer: Box<dyn AdvisorWriter>) -> Self {
        Self {
            loader,
            writer,
            validator: AdvisorValidator::new(),
            statistics: StatisticsService::new(),
            observers: Vec::new(),
            state: PipelineState::Idle,
        }
    }

    /// Register an observer for lifecycle events.
    pub fn with_observer(mut self, observer: Arc<dyn PipelineObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// State reached by the most recent run (`Idle` before the first one).
    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Process `source` and write the valid records to `destination`.
    ///
    /// On success the pipeline ends in `Done`. On failure it ends in
    /// `Failed` and observers learn which stage failed.
    pub fn run(&mut self, source: &Path, destination: &Path) -> PipelineResult<RunReport> {
        self.state = PipelineState::Idle;

        match self.execute(source, destination) {
            Ok(report) => {
                self.transition(PipelineState::Done);
                for observer in &self.observers {
                    observer.report_ready(&report);
                }
                Ok(report)
            }
            Err(e) => {
                let failed_at = self.state;
                self.transition(PipelineState::Failed);
                for observer in &self.observers {
                    observer.run_failed(failed_at, &e);
                }
                Err(e)
            }
        }
    }

    fn execute(&mut self, source: &Path, destination: &Path) -> PipelineResult<RunReport> {
        let LoadedRecords { records, malformed } =
            self.stage(PipelineState::Loading, |p| p.loader.load_records(source))?;

        if records.is_empty() {
            return Ok(RunReport::no_records(source, malformed));
        }

        let normalized: Vec<Advisor> = self.stage(PipelineState::Normalizing, |p| {
            Ok(records.iter().map(|a| p.validator.normalize(a)).collect())
        })?;

        let (valid, rejected) = self.stage(PipelineState::Filtering, |p| {
            let mut valid = Vec::with_capacity(normalized.len());
            let mut rejected = Vec::new();
            for advisor in normalized {
                let errors = p.validator.validate(&advisor);
                if errors.is_empty() {
                    valid.push(advisor);
                } else {
                    rejected.push(RejectedRecord {
                        id: advisor.id,
                        errors,
                    });
                }
            }
            Ok((valid, rejected))
        })?;

        for record in &rejected {
            for observer in &self.observers {
                observer.record_rejected(record);
            }
        }

        let (summary, specialty_statistics) = self.stage(PipelineState::Aggregating, |p| {
            Ok((
                p.statistics.summary(&valid),
                p.statistics.per_specialty_statistics(&valid),
            ))
        })?;

        self.stage(PipelineState::Writing, |p| {
            p.writer.write_records(&valid, destination)
        })?;

        Ok(RunReport {
            outcome: RunOutcome::Completed,
            source: source.to_path_buf(),
            output: Some(destination.to_path_buf()),
            total_count: records.len(),
            valid_count: valid.len(),
            malformed_rows: malformed,
            rejected,
            summary: Some(summary),
            specialty_statistics,
            valid_records: valid,
        })
    }

    /// Enter `state`, run `work`, and report its timing.
    fn stage<T, F>(&mut self, state: PipelineState, work: F) -> PipelineResult<T>
    where
        F: FnOnce(&Self) -> PipelineResult<T>,
    {
        self.transition(state);
        for observer in &self.observers {
            observer.stage_started(state);
        }

        let started = Instant::now();
        let result = work(&*self)?;
        let elapsed = started.elapsed();

        for observer in &self.observers {
            observer.stage_finished(state, elapsed);
        }
        Ok(result)
    }

    fn transition(&mut self, next: PipelineState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal transition {} -> {}",
            self.state,
            next
        );
        self.state = next;
    }
}
