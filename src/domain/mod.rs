//! Domain value objects and types.
//!
//! Rules for the constrained advisor fields (id, email, phone) and the
//! validation errors produced when a record breaks a rule.

pub mod advisor_id;
pub mod email;
pub mod errors;
pub mod phone;

pub use advisor_id::validate_id;
pub use email::validate_email;
pub use errors::{Field, ValidationError};
pub use phone::{validate_phone, PHONE_DIGITS};
