//! Birthday value object.

use super::errors::ValidationError;
use super::Field;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// `chrono` format string for the `DD.MM.YYYY` date layout.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A contact's birthday.
///
/// Birthdays are accepted only in the `DD.MM.YYYY` layout (two-digit day,
/// two-digit month, four-digit year) and are stored as a calendar date,
/// not as the original text.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("08.06.1990").unwrap();
/// assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1990, 6, 8).unwrap());
/// assert_eq!(birthday.to_string(), "08.06.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text does not have
    /// the expected layout or does not name a real calendar date.
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        if !Self::has_layout(value) {
            return Err(ValidationError::InvalidBirthday(value.to_string()));
        }

        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(value.to_string()))
    }

    /// Wrap an already valid calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// `DD.MM.YYYY`: digits everywhere except the two separators.
    fn has_layout(value: &str) -> bool {
        let bytes = value.as_bytes();
        bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                2 | 5 => *b == b'.',
                _ => b.is_ascii_digit(),
            })
    }

    /// Get the stored calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl Field for Birthday {
    const KIND: &'static str = "birthday";

    fn parse_field(raw: &str) -> Result<Self, ValidationError> {
        Self::new(raw)
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Serde support - serialize in DD.MM.YYYY form
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("10.06.2024").unwrap();
        assert_eq!(
            birthday.date(),
            NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
        );
    }

    #[test]
    fn test_birthday_display_reproduces_input() {
        for input in ["01.01.2000", "29.02.2024", "31.12.1999", "08.06.1990"] {
            assert_eq!(Birthday::new(input).unwrap().to_string(), input);
        }
    }

    #[test]
    fn test_birthday_rejects_bad_layout() {
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("1.6.2024").is_err());
        assert!(Birthday::new("2024-06-10").is_err());
        assert!(Birthday::new("10/06/2024").is_err());
        assert!(Birthday::new("10.06.24").is_err());
        assert!(Birthday::new("10.06.2024 ").is_err());
        assert!(Birthday::new("aa.bb.cccc").is_err());
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(Birthday::new("31.02.2024").is_err());
        assert!(Birthday::new("29.02.2023").is_err());
        assert!(Birthday::new("00.01.2024").is_err());
        assert!(Birthday::new("15.13.2024").is_err());
    }

    #[test]
    fn test_birthday_error_carries_input() {
        assert_eq!(
            Birthday::new("31.02.2024"),
            Err(ValidationError::InvalidBirthday("31.02.2024".to_string()))
        );
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("08.06.1990").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"08.06.1990\"");

        let back: Birthday = serde_json::from_str(&json).unwrap();
        assert_eq!(back, birthday);
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<Birthday, _> = serde_json::from_str("\"1990-06-08\"");
        assert!(result.is_err());
    }
}
