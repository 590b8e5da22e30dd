//! Error types for the contact book assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while handling a user command.
///
/// `Display` yields the short message shown to the user; the mapping is
/// deliberately coarse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A name, phone or birthday failed validation
    #[error("Give me name and phone please.")]
    Validation(#[from] ValidationError),

    /// The command was given fewer arguments than it needs
    #[error("Enter user name")]
    MissingArgument,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

impl CommandError {
    /// The field that failed validation, if that is what went wrong.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation(e) => Some(e.field()),
            Self::MissingArgument => None,
        }
    }
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
