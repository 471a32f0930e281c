//! The advisor processing pipeline.
//!
//! [`AdvisorPipeline`] drives a run through the states in [`PipelineState`]
//! and returns a [`RunReport`].

pub mod orchestrator;
pub mod report;
pub mod state;

pub use orchestrator::AdvisorPipeline;
pub use report::{RejectedRecord, RunOutcome, RunReport};
pub use state::PipelineState;
