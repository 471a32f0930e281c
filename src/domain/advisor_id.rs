//! Advisor id rule.

use super::errors::ValidationError;

/// Check that an id is present and positive.
///
/// Uniqueness is not enforced: two records may carry the same id and are
/// still treated as independent records.
pub fn validate_id(id: Option<i64>) -> Result<(), ValidationError> {
    match id {
        Some(id) if id > 0 => Ok(()),
        _ => Err(ValidationError::InvalidId),
    }
}
