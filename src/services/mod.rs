//! Application service layer.
//!
//! Pure record transformations: the validator/normalizer and the statistics
//! aggregator. Neither touches files or logs.

mod statistics;
mod validator;

pub use statistics::{SpecialtyGroups, SpecialtyStats, StatisticsService, Summary};
pub use validator::{AdvisorValidator, NAME_MAX_LEN, NAME_MIN_LEN};
