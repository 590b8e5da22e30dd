//! In-memory address book keyed by contact name.

use super::clock::Clock;
use crate::domain::{Birthday, Name};
use crate::models::Record;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::HashMap;

/// Number of days ahead the default birthday query looks, today included.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// A contact whose birthday falls inside the query window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Name of the contact
    pub name: Name,

    /// Day to congratulate on: the birthday itself, or the following
    /// Monday when it falls on a weekend
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// The congratulation date in `DD.MM.YYYY` form.
    pub fn formatted_date(&self) -> String {
        Birthday::from_date(self.congratulation_date).to_string()
    }
}

/// All contacts, keyed by name.
///
/// Each name maps to at most one record; adding a record under an existing
/// name replaces the old one. Iteration follows first-insertion order.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key.clone(), record).is_none() {
            self.order.push(key);
        }
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by name for modification.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record for `name`, returning it if it existed.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name)?;
        self.order.retain(|key| key != name);
        Some(removed)
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Birthdays in the next [`DEFAULT_WINDOW_DAYS`] days, as seen by `clock`.
    pub fn get_upcoming_birthdays(&self, clock: &dyn Clock) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays(clock.today(), DEFAULT_WINDOW_DAYS)
    }

    /// Contacts whose next birthday is between `today` and `today + window_days`
    /// inclusive.
    ///
    /// Weekend birthdays are congratulated on the following Monday, even when
    /// that Monday lies past the window. Records without a birthday are
    /// skipped. Results are ordered by congratulation date, then name.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday> {
        let mut upcoming: Vec<UpcomingBirthday> = self
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let occurrence = next_occurrence(birthday.date(), today)?;
                let delta_days = (occurrence - today).num_days();

                (0..=i64::from(window_days))
                    .contains(&delta_days)
                    .then(|| UpcomingBirthday {
                        name: record.name().clone(),
                        congratulation_date: shift_off_weekend(occurrence),
                    })
            })
            .collect();

        upcoming.sort_by(|a, b| {
            a.congratulation_date
                .cmp(&b.congratulation_date)
                .then_with(|| a.name.cmp(&b.name))
        });
        upcoming
    }
}

/// The first anniversary of `birth` on or after `today`.
fn next_occurrence(birth: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary_in(birth, today.year())?;
    if this_year < today {
        anniversary_in(birth, today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// `birth` moved to `year`; 29 February becomes 28 February in common years.
fn anniversary_in(birth: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}
