//! Advisor model: one row of the advisor spreadsheet.

use serde::{Deserialize, Serialize};

/// Column headers written to output files, in column order.
pub const COLUMN_HEADERS: [&str; COLUMN_COUNT] = [
    "ID",
    "Nombre",
    "Apellido",
    "Email",
    "Teléfono",
    "Especialidad",
    "Ubicación",
];

/// Number of columns in the canonical row layout.
pub const COLUMN_COUNT: usize = 7;

/// Positional column indexes of the canonical row layout.
pub mod column {
    pub const ID: usize = 0;
    pub const FIRST_NAME: usize = 1;
    pub const LAST_NAME: usize = 2;
    pub const EMAIL: usize = 3;
    pub const PHONE: usize = 4;
    pub const SPECIALTY: usize = 5;
    pub const LOCATION: usize = 6;
}

/// An advisor record.
///
/// Every field is optional because raw input may be incomplete; the
/// validator decides which combinations are acceptable. Records are plain
/// values: normalization produces a new record instead of mutating one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Advisor {
    /// Positive identifier (not required to be unique)
    pub id: Option<i64>,

    /// First name
    pub first_name: Option<String>,

    /// Last name
    pub last_name: Option<String>,

    /// Email address
    pub email: Option<String>,

    /// Phone number, nine digits once valid
    pub phone: Option<String>,

    /// Specialty the advisor is grouped under
    pub specialty: Option<String>,

    /// City or office
    pub location: Option<String>,
}

impl Advisor {
    /// Create a record with every field present.
    pub fn new(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        specialty: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id),
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            email: Some(email.into()),
            phone: Some(phone.into()),
            specialty: Some(specialty.into()),
            location: Some(location.into()),
        }
    }

    /// First and last name joined by a space, skipping absent parts.
    pub fn full_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or("");
        let last = self.last_name.as_deref().unwrap_or("");
        format!("{} {}", first, last).trim().to_string()
    }

    /// The specialty, if present.
    pub fn specialty(&self) -> Option<&str> {
        self.specialty.as_deref()
    }

    /// The location, if present.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}
