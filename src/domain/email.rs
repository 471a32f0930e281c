//! Email address rule.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Dot-atom local part, dot-separated hostname labels and an alphabetic TLD.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$",
    )
    .expect("email pattern is a valid regex")
});

const MAX_LOCAL_PART_LEN: usize = 64;
const MAX_EMAIL_LEN: usize = 254;

/// Check that `email` has the RFC 5321 mailbox shape.
///
/// A dot-atom local part of at most 64 bytes, a single `@`, and a domain of
/// hostname labels ending in an alphabetic top-level domain; 254 bytes total.
///
/// # Errors
///
/// Returns `ValidationError::InvalidEmail` carrying the rejected input.
///
/// # Example
///
/// ```
/// use asesor_processor::domain::validate_email;
///
/// assert!(validate_email("ana.gomez@example.com").is_ok());
/// assert!(validate_email("ana.gomez@example").is_err());
/// ```
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let local_len = email.split_once('@').map_or(0, |(local, _)| local.len());
    if email.len() > MAX_EMAIL_LEN
        || local_len > MAX_LOCAL_PART_LEN
        || !EMAIL_PATTERN.is_match(email)
    {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }
    Ok(())
}
