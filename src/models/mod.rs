//! Data models for advisor records.

pub mod advisor;

pub use advisor::{column, Advisor, COLUMN_COUNT, COLUMN_HEADERS};
