//! Command-line interface: argument parsing and the two commands.

use crate::config::Config;
use crate::generator::SampleDataGenerator;
use crate::metrics::PipelineMetrics;
use crate::observability::TracingObserver;
use crate::pipeline::{AdvisorPipeline, RunOutcome, RunReport};
use crate::repositories::FileAdvisorRepository;
use crate::services::StatisticsService;
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const DEFAULT_FILTER_SPECIALTY: &str = "Tecnología";
const DEFAULT_TOP: usize = 5;

#[derive(Parser, Debug)]
#[command(author, version, about = "Validate, normalize and aggregate advisor spreadsheets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Process an advisor file and write the valid records
    Process(ProcessArgs),
    /// Write a synthetic advisor file
    Generate(GenerateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ProcessArgs {
    /// Input file (CSV or workbook); overrides ASESORES_INPUT_PATH
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output file (CSV or .xlsx); defaults to a timestamped CSV in ASESORES_OUTPUT_DIR
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Fail instead of generating sample data when the input is missing
    #[arg(long)]
    pub no_generate: bool,

    /// Also write the run report as JSON
    #[arg(long, value_name = "PATH")]
    pub report_json: Option<PathBuf>,

    /// Specialty used for the filter demonstration
    #[arg(long, default_value = DEFAULT_FILTER_SPECIALTY)]
    pub filter_specialty: String,

    /// Number of advisors listed ordered by specialty
    #[arg(long, default_value_t = DEFAULT_TOP)]
    pub top: usize,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Destination file; overrides ASESORES_INPUT_PATH
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Number of records; overrides ASESORES_SAMPLE_SIZE
    #[arg(long)]
    pub count: Option<usize>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Fraction of records generated with an invalid phone
    #[arg(long, default_value_t = 0.0)]
    pub invalid_ratio: f64,
}

/// Execute the parsed command, printing results to stdout.
pub fn run(cli: Cli, config: &Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Process(args) => {
            process(&args, config, &mut out)?;
        }
        Command::Generate(args) => {
            let path = generate(&args, config)?;
            writeln!(out, "Sample data written to {}", path.display())?;
        }
    }
    Ok(())
}

/// Run the pipeline for `args`, generating missing input when allowed.
pub fn process(args: &ProcessArgs, config: &Config, out: &mut impl Write) -> Result<RunReport> {
    let input = args.input.clone().unwrap_or_else(|| config.input_path.clone());
    ensure_input(&input, config, !args.no_generate)?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| config.output_path_at(chrono::Local::now().naive_local()));

    let metrics = PipelineMetrics::new();
    let mut pipeline = AdvisorPipeline::new(
        Box::new(FileAdvisorRepository::new()),
        Box::new(FileAdvisorRepository::new()),
    )
    .with_observer(Arc::new(TracingObserver::new()))
    .with_observer(Arc::new(metrics.clone()));

    let report = pipeline
        .run(&input, &output)
        .with_context(|| format!("Failed to process {}", input.display()))?;

    let summary = metrics.summary();
    tracing::debug!(
        total_ms = summary.total_duration_ms,
        stages = ?summary.stage_duration_ms,
        "Run metrics"
    );

    write_report(&report, out)?;

    if let Some(path) = &args.report_json {
        report
            .write_json(path)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        tracing::info!(path = %path.display(), "JSON report written");
    }

    if report.outcome == RunOutcome::Completed {
        write_demonstrations(&report, &args.filter_specialty, args.top, out)?;
    }

    Ok(report)
}

/// Write a sample file as described by `args`; returns its path.
pub fn generate(args: &GenerateArgs, config: &Config) -> Result<PathBuf> {
    let path = args.output.clone().unwrap_or_else(|| config.input_path.clone());
    let count = args.count.unwrap_or(config.sample_size);
    if count == 0 {
        bail!("--count must be at least 1");
    }

    let mut generator = match args.seed {
        Some(seed) => SampleDataGenerator::with_seed(seed),
        None => SampleDataGenerator::new(),
    }
    .with_invalid_ratio(args.invalid_ratio);

    generator
        .write_sample_file(&path, count, &FileAdvisorRepository::new())
        .with_context(|| format!("Failed to write sample data to {}", path.display()))?;
    Ok(path)
}

fn ensure_input(input: &Path, config: &Config, allow_generate: bool) -> Result<()> {
    if input.exists() {
        return Ok(());
    }
    if !(allow_generate && config.generate_missing) {
        bail!("Input file not found: {}", input.display());
    }

    tracing::warn!(path = %input.display(), "Input file not found, generating sample data");
    SampleDataGenerator::new()
        .write_sample_file(input, config.sample_size, &FileAdvisorRepository::new())
        .with_context(|| format!("Failed to generate {}", input.display()))?;
    Ok(())
}

/// Print the final report: counts, then every rejected record with its errors.
pub fn write_report(report: &RunReport, out: &mut impl Write) -> io::Result<()> {
    if report.outcome == RunOutcome::NoRecords {
        writeln!(out, "No advisors found in {}", report.source.display())?;
        return Ok(());
    }

    writeln!(out, "=== Final report ===")?;
    writeln!(out, "Total advisors: {}", report.total_count)?;
    writeln!(out, "Valid advisors: {}", report.valid_count)?;
    writeln!(out, "Invalid advisors: {}", report.invalid_count())?;
    if !report.malformed_rows.is_empty() {
        writeln!(out, "Skipped rows: {}", report.malformed_rows.len())?;
    }

    for rejected in &report.rejected {
        let id = rejected
            .id
            .map_or_else(|| "-".to_string(), |id| id.to_string());
        writeln!(out, "  ID {}: {}", id, rejected.messages().join(", "))?;
    }

    if let Some(output) = &report.output {
        writeln!(out, "Output: {}", output.display())?;
    }
    Ok(())
}

fn write_demonstrations(
    report: &RunReport,
    specialty: &str,
    top: usize,
    out: &mut impl Write,
) -> io::Result<()> {
    let statistics = StatisticsService::new();

    let filtered = statistics.filter(&report.valid_records, Some(specialty), None);
    writeln!(out, "=== Advisors in {} ({}) ===", specialty, filtered.len())?;
    for advisor in filtered {
        writeln!(
            out,
            "  {} - {}",
            advisor.full_name(),
            advisor.location().unwrap_or("-")
        )?;
    }

    let ranked = statistics.top_by_specialty(&report.valid_records, top);
    writeln!(out, "=== Top {} by specialty ===", ranked.len())?;
    for advisor in ranked {
        writeln!(
            out,
            "  {} - {}",
            advisor.specialty().unwrap_or("-"),
            advisor.full_name()
        )?;
    }
    Ok(())
}
