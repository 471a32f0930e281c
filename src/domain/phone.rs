//! Phone number rule.

use super::errors::ValidationError;

/// Number of digits in an advisor phone number.
pub const PHONE_DIGITS: usize = 9;

/// Check that `phone` is exactly nine ASCII digits.
///
/// Formatted input such as `600-123-456` is rejected rather than stripped.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.len() == PHONE_DIGITS && phone.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone(phone.to_string()))
    }
}
