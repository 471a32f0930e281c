//! Advisor validation errors.

use serde::{Serialize, Serializer};
use std::fmt;

/// Record fields that validation rules refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    Specialty,
    Location,
}

impl Field {
    /// Human-readable field name used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::FirstName => "first name",
            Field::LastName => "last name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Specialty => "specialty",
            Field::Location => "location",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single violated validation rule.
///
/// The `Display` output is the message shown to users in the run report, so
/// its wording is part of the observable behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// There is no record to validate.
    MissingRecord,

    /// The id is absent or not a positive number.
    InvalidId,

    /// A mandatory field is absent or blank.
    Required(Field),

    /// A name field is shorter than the minimum length.
    TooShort { field: Field, min: usize },

    /// A name field is longer than the maximum length.
    TooLong { field: Field, max: usize },

    /// The email address is not syntactically valid.
    InvalidEmail(String),

    /// The phone number is not exactly nine digits.
    InvalidPhone(String),
}

impl ValidationError {
    /// The field this error refers to, if any.
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::MissingRecord => None,
            Self::InvalidId => Some(Field::Id),
            Self::Required(field) => Some(*field),
            Self::TooShort { field, .. } | Self::TooLong { field, .. } => Some(*field),
            Self::InvalidEmail(_) => Some(Field::Email),
            Self::InvalidPhone(_) => Some(Field::Phone),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRecord => write!(f, "advisor record cannot be missing"),
            Self::InvalidId => write!(f, "id is required and must be a positive number"),
            Self::Required(field) => write!(f, "{} is required", field),
            Self::TooShort { field, min } => {
                write!(f, "{} must have at least {} characters", field, min)
            }
            Self::TooLong { field, max } => {
                write!(f, "{} cannot exceed {} characters", field, max)
            }
            Self::InvalidEmail(email) => write!(f, "invalid email format: {}", email),
            Self::InvalidPhone(_) => write!(f, "phone must contain exactly 9 digits"),
        }
    }
}

impl std::error::Error for ValidationError {}

// Reports carry the rendered message rather than the variant structure
impl Serialize for ValidationError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
