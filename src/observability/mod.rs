//! Observability hooks for pipeline runs.
//!
//! The pipeline itself never logs; it reports lifecycle events to observers
//! registered on it. `TracingObserver` turns those events into structured
//! log lines, and `metrics::PipelineMetrics` accumulates counters.

pub mod observer;

pub use observer::{PipelineObserver, TracingObserver};
