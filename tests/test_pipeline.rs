mod mocks;

use asesor_processor::error::{MalformedRow, PipelineError};
use asesor_processor::models::Advisor;
use asesor_processor::pipeline::{AdvisorPipeline, PipelineState, RunOutcome};
use asesor_processor::PipelineMetrics;
use mocks::{MockAdvisorLoader, MockAdvisorWriter, ObservedEvent, RecordingObserver};
use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

fn advisor(id: i64, first: &str, phone: &str, specialty: &str) -> Advisor {
    Advisor::new(
        id,
        first,
        "Gomez",
        format!("{}@asesorame.com", first.trim().to_lowercase()),
        phone,
        specialty,
        "Madrid",
    )
}

fn pipeline_with(
    loader: &MockAdvisorLoader,
    writer: &MockAdvisorWriter,
    observer: &RecordingObserver,
) -> AdvisorPipeline {
    AdvisorPipeline::new(Box::new(loader.clone()), Box::new(writer.clone()))
        .with_observer(Arc::new(observer.clone()))
}

fn run_paths() -> (PathBuf, PathBuf) {
    (PathBuf::from("in.csv"), PathBuf::from("out/result.csv"))
}

#[test]
fn test_single_record_scenario() {
    let loader = MockAdvisorLoader::with_records(vec![Advisor::new(
        1,
        " ana ",
        "Gomez",
        "A@B.COM",
        "600123456",
        "ventas",
        "Madrid",
    )]);
    let writer = MockAdvisorWriter::new();
    let observer = RecordingObserver::new();
    let (source, destination) = run_paths();

    let report = pipeline_with(&loader, &writer, &observer)
        .run(&source, &destination)
        .unwrap();

    assert_eq!(report.outcome, RunOutcome::Completed);
    assert_eq!(report.total_count, 1);
    assert_eq!(report.valid_count, 1);
    assert!(report.rejected.is_empty());

    let written = writer.last_written().unwrap();
    assert_eq!(written.len(), 1);
    assert_eq!(written[0].first_name.as_deref(), Some("Ana"));
    assert_eq!(written[0].email.as_deref(), Some("a@b.com"));
    assert_eq!(written[0].specialty.as_deref(), Some("Ventas"));
    assert_eq!(writer.last_destination(), Some(destination));

    let summary = report.summary.unwrap();
    assert_eq!(summary.total_count, 1);
    assert_eq!(
        summary.distinct_specialties,
        BTreeSet::from(["Ventas".to_string()])
    );
    assert_eq!(summary.specialty_counts.get("Ventas"), Some(&1));
}

#[test]
fn test_empty_input_produces_no_output() {
    let loader = MockAdvisorLoader::new();
    let writer = MockAdvisorWriter::new();
    let observer = RecordingObserver::new();
    let (source, destination) = run_paths();
    let mut pipeline = pipeline_with(&loader, &writer, &observer);

    let report = pipeline.run(&source, &destination).unwrap();

    assert_eq!(report.outcome, RunOutcome::NoRecords);
    assert_eq!(report.total_count, 0);
    assert!(report.output.is_none());
    assert!(report.summary.is_none());
    assert_eq!(writer.call_count(), 0);
    assert_eq!(pipeline.state(), PipelineState::Done);
    assert_eq!(observer.started_stages(), vec![PipelineState::Loading]);
}

#[test]
fn test_only_malformed_rows_counts_as_empty() {
    let loader = MockAdvisorLoader::new();
    loader.add_malformed(MalformedRow::new(1, "id is not a number: abc"));
    let writer = MockAdvisorWriter::new();
    let (source, destination) = run_paths();

    let report = pipeline_with(&loader, &writer, &RecordingObserver::new())
        .run(&source, &destination)
        .unwrap();

    assert_eq!(report.outcome, RunOutcome::NoRecords);
    assert_eq!(report.malformed_rows.len(), 1);
    assert_eq!(writer.call_count(), 0);
}

#[test]
fn test_invalid_records_are_reported_and_excluded() {
    let loader = MockAdvisorLoader::with_records(vec![
        advisor(1, "Ana", "600123456", "Ventas"),
        advisor(2, "Luis", "12345", "Finanzas"),
        advisor(3, "Eva", "611111111", "Finanzas"),
    ]);
    let writer = MockAdvisorWriter::new();
    let observer = RecordingObserver::new();
    let (source, destination) = run_paths();

    let report = pipeline_with(&loader, &writer, &observer)
        .run(&source, &destination)
        .unwrap();

    assert_eq!(report.total_count, 3);
    assert_eq!(report.valid_count, 2);
    assert_eq!(report.invalid_count(), 1);
    assert_eq!(report.rejected[0].id, Some(2));
    assert_eq!(
        report.rejected[0].messages(),
        vec!["phone must contain exactly 9 digits".to_string()]
    );

    let written_ids: Vec<_> = writer
        .last_written()
        .unwrap()
        .iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(written_ids, vec![Some(1), Some(3)]);

    assert!(observer.events().contains(&ObservedEvent::Rejected(
        Some(2),
        vec!["phone must contain exactly 9 digits".to_string()]
    )));

    let finanzas = &report.specialty_statistics["Finanzas"];
    assert_eq!(finanzas.count, 1);
    assert_eq!(finanzas.specialty_distribution.len(), 1);
}

#[test]
fn test_stage_events_follow_state_order() {
    let loader = MockAdvisorLoader::with_records(vec![advisor(1, "Ana", "600123456", "Ventas")]);
    let writer = MockAdvisorWriter::new();
    let observer = RecordingObserver::new();
    let (source, destination) = run_paths();

    pipeline_with(&loader, &writer, &observer)
        .run(&source, &destination)
        .unwrap();

    assert_eq!(observer.started_stages(), PipelineState::STAGES.to_vec());
    assert_eq!(
        observer.events().last(),
        Some(&ObservedEvent::Report(RunOutcome::Completed))
    );
}

#[test]
fn test_load_failure_ends_in_failed_state() {
    let loader = MockAdvisorLoader::new();
    loader.fail_with(io::ErrorKind::NotFound);
    let writer = MockAdvisorWriter::new();
    let observer = RecordingObserver::new();
    let (source, destination) = run_paths();
    let mut pipeline = pipeline_with(&loader, &writer, &observer);

    let result = pipeline.run(&source, &destination);

    assert!(matches!(result, Err(PipelineError::Io { .. })));
    assert_eq!(pipeline.state(), PipelineState::Failed);
    assert_eq!(writer.call_count(), 0);
    assert!(matches!(
        observer.events().last(),
        Some(ObservedEvent::Failed(PipelineState::Loading, _))
    ));
}

#[test]
fn test_write_failure_reports_writing_stage() {
    let loader = MockAdvisorLoader::with_records(vec![advisor(1, "Ana", "600123456", "Ventas")]);
    let writer = MockAdvisorWriter::new();
    writer.fail_with(io::ErrorKind::PermissionDenied);
    let observer = RecordingObserver::new();
    let (source, destination) = run_paths();
    let mut pipeline = pipeline_with(&loader, &writer, &observer);

    assert!(pipeline.run(&source, &destination).is_err());
    assert_eq!(pipeline.state(), PipelineState::Failed);
    assert!(matches!(
        observer.events().last(),
        Some(ObservedEvent::Failed(PipelineState::Writing, _))
    ));
}

#[test]
fn test_metrics_observer_counts_runs() {
    let loader = MockAdvisorLoader::with_records(vec![
        advisor(1, "Ana", "600123456", "Ventas"),
        advisor(2, "Luis", "600-1234", "Ventas"),
    ]);
    let writer = MockAdvisorWriter::new();
    let metrics = PipelineMetrics::new();
    let mut pipeline = AdvisorPipeline::new(Box::new(loader.clone()), Box::new(writer.clone()))
        .with_observer(Arc::new(metrics.clone()));

    pipeline.run(Path::new("a.csv"), Path::new("b.csv")).unwrap();
    pipeline.run(Path::new("a.csv"), Path::new("b.csv")).unwrap();

    let summary = metrics.summary();
    assert_eq!(summary.runs_completed, 2);
    assert_eq!(summary.runs_failed, 0);
    assert_eq!(summary.records_loaded, 4);
    assert_eq!(summary.records_valid, 2);
    assert_eq!(summary.records_rejected, 2);
    assert_eq!(loader.call_count(), 2);
    assert_eq!(
        loader.requested_sources(),
        vec![PathBuf::from("a.csv"), PathBuf::from("a.csv")]
    );
}
