//! Property tests for field validation.
//!
//! These check the validation rules over generated inputs rather than a
//! handful of fixed examples.

use chrono::NaiveDate;
use contact_book::{Birthday, Name, Phone, ValidationError};
use proptest::prelude::*;

/// Strings of exactly `len` arbitrary characters.
fn string_of_len(len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<char>(), len).prop_map(|chars| chars.into_iter().collect())
}

/// Strings of any character count other than ten.
fn wrong_length_string() -> impl Strategy<Value = String> {
    (0..40usize)
        .prop_filter("ten characters is a valid phone", |len| *len != 10)
        .prop_flat_map(string_of_len)
}

/// Calendar dates with a four-digit year.
fn four_digit_year_date() -> impl Strategy<Value = NaiveDate> {
    (1000i32..=9999, 1u32..=366).prop_filter_map("day of year past year end", |(year, day)| {
        NaiveDate::from_yo_opt(year, day)
    })
}

proptest! {
    /// Any ten-character string is a phone and renders back unchanged
    #[test]
    fn prop_ten_char_phone_round_trips(value in string_of_len(10)) {
        let phone = Phone::new(value.clone());
        prop_assert!(phone.is_ok(), "'{}' should be a valid phone", value);
        let phone = phone.unwrap();
        prop_assert_eq!(phone.as_str(), value.as_str());
    }

    /// Any other character count is rejected
    #[test]
    fn prop_wrong_length_phone_rejected(value in wrong_length_string()) {
        prop_assert_eq!(
            Phone::new(value.clone()),
            Err(ValidationError::InvalidPhone(value))
        );
    }

    /// A name is rejected exactly when it is empty
    #[test]
    fn prop_name_rejected_only_when_empty(value in any::<String>()) {
        let result = Name::new(value.clone());
        if value.is_empty() {
            prop_assert_eq!(result, Err(ValidationError::EmptyName));
        } else {
            let name = result.unwrap();
            prop_assert_eq!(name.as_str(), value.as_str());
        }
    }

    /// DD.MM.YYYY text of any real date parses to that date and renders back unchanged
    #[test]
    fn prop_birthday_round_trips(date in four_digit_year_date()) {
        let text = date.format("%d.%m.%Y").to_string();
        let birthday = Birthday::new(&text);
        prop_assert!(birthday.is_ok(), "'{}' should be a valid birthday", text);

        let birthday = birthday.unwrap();
        prop_assert_eq!(birthday.date(), date);
        prop_assert_eq!(birthday.to_string(), text);
    }
}
