//! Domain value objects and types.
//!
//! This module contains the validated scalar fields a contact is made of:
//! names, phone numbers and birthdays. Each value object is checked at
//! construction time, so an invalid field can never be stored in a record.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;

use std::fmt::Display;

/// A validated scalar value with a canonical string rendering.
///
/// `Display` produces the same text the value was (or could have been)
/// parsed from, so `Field::new(field.to_string())` always succeeds.
pub trait Field: Display + Sized {
    /// Human readable name of the field, reported by [`ValidationError::field`].
    const KIND: &'static str;

    /// Parse and validate a raw input value.
    fn parse_field(raw: &str) -> Result<Self, ValidationError>;

    /// Render the value in its canonical text form.
    fn render(&self) -> String {
        self.to_string()
    }
}
