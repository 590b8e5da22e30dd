//! The address book and its birthday queries.

pub mod address_book;
pub mod clock;

pub use address_book::{AddressBook, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
pub use clock::{Clock, FixedClock, SystemClock};
