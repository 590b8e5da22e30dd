//! Tests for the address book through the public library API.

use chrono::NaiveDate;
use contact_book::{AddressBook, FixedClock, Name, Phone, Record, ValidationError};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_phone_round_trips_for_ten_characters() {
    for value in ["0000000000", "0501234567", "9999999999", "+380-12345"] {
        assert_eq!(Phone::new(value).unwrap().as_str(), value);
    }
}

#[test]
fn test_phone_rejects_other_lengths() {
    let mut value = String::new();
    for len in 0..20 {
        if len != 10 {
            assert_eq!(
                Phone::new(value.clone()),
                Err(ValidationError::InvalidPhone(value.clone()))
            );
        }
        value.push('1');
    }
}

#[test]
fn test_name_rules() {
    assert_eq!(Name::new(""), Err(ValidationError::EmptyName));
    assert!(Name::new("a").is_ok());
    assert!(Name::new("Олена").is_ok());
}

#[test]
fn test_find_returns_added_record() {
    let mut book = AddressBook::new();

    let mut john = Record::new("John").unwrap();
    john.add_phone("1234567890").unwrap();
    john.add_phone("5555555555").unwrap();
    book.add_record(john.clone());

    let found = book.find("John").unwrap();
    assert_eq!(found.name(), john.name());
    assert_eq!(found.phones(), john.phones());

    book.delete("John");
    assert!(book.find("John").is_none());
}

#[test]
fn test_edit_phone_only_touches_first_phone() {
    let mut record = Record::new("John").unwrap();
    record.add_phone("1234567890").unwrap();
    record.add_phone("5555555555").unwrap();

    let before = record.clone();
    assert_eq!(record.edit_phone("5555555555", "1112223333"), Ok(false));
    assert_eq!(record, before);

    assert_eq!(record.edit_phone("1234567890", "1112223333"), Ok(true));
    assert_eq!(record.phones()[0].as_str(), "1112223333");
    assert_eq!(record.phones()[1].as_str(), "5555555555");
}

#[test]
fn test_upcoming_birthdays_scenario() {
    let mut book = AddressBook::new();

    let mut alice = Record::new("Alice").unwrap();
    alice.add_birthday("08.06.1995").unwrap();
    book.add_record(alice);

    let mut bob = Record::new("Bob").unwrap();
    bob.add_birthday("20.06.1995").unwrap();
    book.add_record(bob);

    book.add_record(Record::new("NoBirthday").unwrap());

    let upcoming = book.get_upcoming_birthdays(&FixedClock::new(date(2024, 6, 3)));
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].name.as_str(), "Alice");
    assert_eq!(upcoming[0].congratulation_date, date(2024, 6, 10));
    assert_eq!(upcoming[0].formatted_date(), "10.06.2024");
}
