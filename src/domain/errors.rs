//! Domain validation errors.

use super::{Birthday, Field, Name, Phone};
use std::fmt;

/// Errors that can occur during field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number does not have exactly ten characters.
    InvalidPhone(String),

    /// The provided birthday is not a real date in `DD.MM.YYYY` form.
    InvalidBirthday(String),
}

impl ValidationError {
    /// Which field failed, as the field's [`Field::KIND`].
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => Name::KIND,
            Self::InvalidPhone(_) => Phone::KIND,
            Self::InvalidBirthday(_) => Birthday::KIND,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidPhone(phone) => {
                write!(f, "Phone number must be 10 digits: {}", phone)
            }
            Self::InvalidBirthday(date) => {
                write!(f, "Invalid date format. Use DD.MM.YYYY: {}", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
