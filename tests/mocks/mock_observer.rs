use asesor_processor::error::PipelineError;
use asesor_processor::observability::PipelineObserver;
use asesor_processor::pipeline::{PipelineState, RejectedRecord, RunOutcome, RunReport};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Events seen by `RecordingObserver`, without timings.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub enum ObservedEvent {
    Started(PipelineState),
    Finished(PipelineState),
    Rejected(Option<i64>, Vec<String>),
    Failed(PipelineState, String),
    Report(RunOutcome),
}

/// Observer that records every event in order.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<ObservedEvent>>>,
}

#[allow(dead_code)]
impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ObservedEvent> {
        self.events.lock().unwrap().clone()
    }

    /// States for which `stage_started` fired, in order.
    pub fn started_stages(&self) -> Vec<PipelineState> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ObservedEvent::Started(state) => Some(state),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: ObservedEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl PipelineObserver for RecordingObserver {
    fn stage_started(&self, stage: PipelineState) {
        self.push(ObservedEvent::Started(stage));
    }

    fn stage_finished(&self, stage: PipelineState, _elapsed: Duration) {
        self.push(ObservedEvent::Finished(stage));
    }

    fn record_rejected(&self, rejected: &RejectedRecord) {
        self.push(ObservedEvent::Rejected(rejected.id, rejected.messages()));
    }

    fn run_failed(&self, stage: PipelineState, error: &PipelineError) {
        self.push(ObservedEvent::Failed(stage, error.to_string()));
    }

    fn report_ready(&self, report: &RunReport) {
        self.push(ObservedEvent::Report(report.outcome));
    }
}
