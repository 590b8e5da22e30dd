//! Command handlers.
//!
//! Each handler takes the command's arguments and the address book and
//! returns the text to show the user. Validation problems and missing
//! arguments come back as [`CommandError`]; a missing contact is an
//! ordinary reply, not an error.

use crate::book::{AddressBook, DEFAULT_WINDOW_DAYS};
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Fetch a required positional argument.
fn arg<'a>(args: &[&'a str], index: usize) -> CommandResult<&'a str> {
    args.get(index).copied().ok_or(CommandError::MissingArgument)
}

/// `add <name> <phone>`: create the contact if needed and append the phone.
///
/// The phone is validated before a new contact is stored, so a rejected
/// `add` never leaves an empty contact behind.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let phone = arg(args, 1)?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change <name> <phone>`: replace all of a contact's phones with one.
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let phone = arg(args, 1)?;

    match book.find_mut(name) {
        Some(record) => {
            record.replace_phones(phone)?;
            Ok("Contact changed.".to_string())
        }
        None => Ok("Contact not found.".to_string()),
    }
}

/// `phone <name>`: list a contact's phones, comma separated.
pub fn show_phone(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let name = arg(args, 0)?;

    Ok(match book.find(name) {
        Some(record) => join_phones(record),
        None => "Contact not found".to_string(),
    })
}

/// `all`: one `name: phones` line per contact.
pub fn show_all(book: &AddressBook) -> CommandResult<String> {
    if book.is_empty() {
        return Ok("No contacts saved.".to_string());
    }

    let lines: Vec<String> = book
        .iter()
        .map(|record| format!("{}: {}", record.name(), join_phones(record)))
        .collect();
    Ok(lines.join("\n"))
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let birthday = arg(args, 1)?;

    match book.find_mut(name) {
        Some(record) => {
            record.add_birthday(birthday)?;
            Ok(format!("Birthday added for {}.", name))
        }
        None => Ok(format!("Contact '{}' not found.", name)),
    }
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let name = arg(args, 0)?;

    Ok(match book.find(name) {
        Some(record) => match record.birthday() {
            Some(birthday) => format!("{}'s birthday is on {}", name, birthday),
            None => format!("{} has no birthday saved.", name),
        },
        None => format!("Contact '{}' not found.", name),
    })
}

/// `birthdays`: contacts to congratulate in the coming days, one line per date.
pub fn birthdays(book: &AddressBook, today: NaiveDate, window_days: u32) -> CommandResult<String> {
    let upcoming = book.upcoming_birthdays(today, window_days);
    if upcoming.is_empty() {
        return Ok(if window_days == DEFAULT_WINDOW_DAYS {
            "No upcoming birthdays this week.".to_string()
        } else {
            format!("No upcoming birthdays in the next {} days.", window_days)
        });
    }

    let mut by_date: BTreeMap<NaiveDate, (String, Vec<String>)> = BTreeMap::new();
    for entry in upcoming {
        by_date
            .entry(entry.congratulation_date)
            .or_insert_with(|| (entry.formatted_date(), Vec::new()))
            .1
            .push(entry.name.into_inner());
    }

    let lines: Vec<String> = by_date
        .into_values()
        .map(|(date, names)| format!("{}: {}", date, names.join(", ")))
        .collect();
    Ok(lines.join("\n"))
}

fn join_phones(record: &Record) -> String {
    record
        .phones()
        .iter()
        .map(|phone| phone.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
