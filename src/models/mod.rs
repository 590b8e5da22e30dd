//! Data models for the address book.
//!
//! A [`Record`] is one contact built from the validated fields in
//! [`crate::domain`].

pub mod record;

pub use record::Record;
