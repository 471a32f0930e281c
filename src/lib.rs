//! Asesor Processor - validation, normalization and aggregation of advisor records.
//!
//! Advisor ("asesor") records are loaded from a CSV file or workbook,
//! normalized, validated field by field, summarized per specialty, and the
//! valid subset is written back out as CSV or `.xlsx`.
//!
//! # Architecture
//!
//! - **models**: The advisor record and its 7-column row layout
//! - **domain**: Value objects for constrained fields and validation errors
//! - **services**: Validator/normalizer and statistics aggregator (pure)
//! - **repositories**: Loader/writer ports and their CSV/workbook adapters
//! - **pipeline**: State-machine orchestrator and the run report
//! - **observability**: Observer interface and the tracing observer
//! - **metrics**: Counters and stage timings fed by pipeline events
//! - **generator**: Synthetic sample data
//! - **config**: Configuration from environment variables
//! - **cli**: Command-line parsing and commands
//! - **error**: Error types for the load/write boundary and configuration

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod generator;
pub mod metrics;
pub mod models;
pub mod observability;
pub mod pipeline;
pub mod repositories;
pub mod services;

// Re-export commonly used types
pub use config::Config;
pub use domain::ValidationError;
pub use error::{ConfigError, MalformedRow, PipelineError, PipelineResult};
pub use generator::SampleDataGenerator;
pub use metrics::{MetricsSummary, PipelineMetrics};
pub use models::Advisor;
pub use observability::{PipelineObserver, TracingObserver};
pub use pipeline::{AdvisorPipeline, PipelineState, RejectedRecord, RunOutcome, RunReport};
pub use repositories::{AdvisorLoader, AdvisorWriter, FileAdvisorRepository, LoadedRecords};
pub use services::{AdvisorValidator, SpecialtyStats, StatisticsService, Summary};
