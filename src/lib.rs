//! Contact Book - a command-line assistant for contacts and birthdays.
//!
//! The assistant keeps contacts in memory for the lifetime of the process,
//! accepts one text command per line and reports whose birthday is coming
//! up in the next week.
//!
//! # Architecture
//!
//! - **domain**: Validated field types (name, phone, birthday)
//! - **models**: The contact record
//! - **book**: The address book, birthday query and clock abstraction
//! - **commands**: Command parsing and handlers
//! - **assistant**: The interactive read-eval-print loop
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod assistant;
pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use assistant::Assistant;
pub use book::{AddressBook, Clock, FixedClock, SystemClock, UpcomingBirthday};
pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError};
pub use models::Record;
