//! Advisor normalization and validation.
//!
//! Normalization is unconditional and is not itself validated. Validation
//! reports every violated rule, in a fixed order, so that reports are
//! deterministic.

use crate::domain::{validate_email, validate_id, validate_phone, Field, ValidationError};
use crate::models::Advisor;

/// Minimum length of first and last names, in characters.
pub const NAME_MIN_LEN: usize = 2;

/// Maximum length of first and last names, in characters.
pub const NAME_MAX_LEN: usize = 50;

/// Stateless validator and normalizer for advisor records.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvisorValidator;

impl AdvisorValidator {
    pub fn new() -> Self {
        Self
    }

    /// Produce the normalized form of `advisor`.
    ///
    /// - first name, last name and specialty are trimmed, lower-cased and
    ///   capitalized
    /// - email is trimmed and lower-cased
    /// - phone, location and id are copied as-is
    ///
    /// Blank or absent fields are left untouched.
    pub fn normalize(&self, advisor: &Advisor) -> Advisor {
        Advisor {
            id: advisor.id,
            first_name: normalize_with(&advisor.first_name, capitalize_lower),
            last_name: normalize_with(&advisor.last_name, capitalize_lower),
            email: normalize_with(&advisor.email, |s| s.trim().to_lowercase()),
            phone: advisor.phone.clone(),
            specialty: normalize_with(&advisor.specialty, capitalize_lower),
            location: advisor.location.clone(),
        }
    }

    /// Validate a record that may be absent.
    ///
    /// An absent record yields only `ValidationError::MissingRecord`.
    pub fn validate_optional(&self, advisor: Option<&Advisor>) -> Vec<ValidationError> {
        match advisor {
            Some(advisor) => self.validate(advisor),
            None => vec![ValidationError::MissingRecord],
        }
    }

    /// Validate a record, returning one error per violated rule.
    ///
    /// Rules are checked in this order: id, first name, last name, email,
    /// phone, specialty, location. Each field contributes at most one error.
    pub fn validate(&self, advisor: &Advisor) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if let Err(e) = validate_id(advisor.id) {
            errors.push(e);
        }

        check_name(&mut errors, Field::FirstName, advisor.first_name.as_deref());
        check_name(&mut errors, Field::LastName, advisor.last_name.as_deref());

        match non_blank(advisor.email.as_deref()) {
            None => errors.push(ValidationError::Required(Field::Email)),
            Some(email) => {
                if let Err(e) = validate_email(email) {
                    errors.push(e);
                }
            }
        }

        match non_blank(advisor.phone.as_deref()) {
            None => errors.push(ValidationError::Required(Field::Phone)),
            Some(phone) => {
                if let Err(e) = validate_phone(phone) {
                    errors.push(e);
                }
            }
        }

        if non_blank(advisor.specialty.as_deref()).is_none() {
            errors.push(ValidationError::Required(Field::Specialty));
        }
        if non_blank(advisor.location.as_deref()).is_none() {
            errors.push(ValidationError::Required(Field::Location));
        }

        errors
    }

    /// Whether `advisor` passes every rule.
    pub fn is_valid(&self, advisor: &Advisor) -> bool {
        self.validate(advisor).is_empty()
    }
}

/// `Some(value)` unless the value is absent, empty or whitespace only.
///
/// Whitespace is Unicode `White_Space`, so a no-break space (U+00A0) is blank.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn normalize_with(value: &Option<String>, f: impl Fn(&str) -> String) -> Option<String> {
    match non_blank(value.as_deref()) {
        Some(v) => Some(f(v)),
        None => value.clone(),
    }
}

fn check_name(errors: &mut Vec<ValidationError>, field: Field, value: Option<&str>) {
    let Some(name) = non_blank(value) else {
        errors.push(ValidationError::Required(field));
        return;
    };

    let len = name.chars().count();
    if len < NAME_MIN_LEN {
        errors.push(ValidationError::TooShort {
            field,
            min: NAME_MIN_LEN,
        });
    } else if len > NAME_MAX_LEN {
        errors.push(ValidationError::TooLong {
            field,
            max: NAME_MAX_LEN,
        });
    }
}

/// Lower-case and trim `value`, then upper-case its first character.
///
/// The first character is only replaced when its upper-case form is a single
/// character, which keeps the transformation idempotent (`ß` stays `ß`).
fn capitalize_lower(value: &str) -> String {
    let lowered = value.to_lowercase();
    let trimmed = lowered.trim();

    let mut chars = trimmed.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut upper = first.to_uppercase();
    let head = match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => first,
    };

    let mut result = String::with_capacity(trimmed.len());
    result.push(head);
    result.push_str(chars.as_str());
    result
}
