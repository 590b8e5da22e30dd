//! Text commands understood by the assistant.
//!
//! A line of input is split into a command keyword and its arguments by
//! [`parse_input`]; [`handlers`] implements each command against an
//! [`AddressBook`](crate::book::AddressBook).

pub mod handlers;

use std::fmt;

/// A recognised command keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    /// `close` or `exit`
    Exit,
}

impl Command {
    /// Match a lower-cased keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let command = match keyword {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "close" | "exit" => Self::Exit,
            _ => return None,
        };
        Some(command)
    }

    /// The keyword this command is typed as.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Add => "add",
            Self::Change => "change",
            Self::Phone => "phone",
            Self::All => "all",
            Self::AddBirthday => "add-birthday",
            Self::ShowBirthday => "show-birthday",
            Self::Birthdays => "birthdays",
            Self::Exit => "exit",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// One line of user input, split into words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput<'a> {
    /// First word, lower-cased
    pub keyword: String,

    /// Remaining words, as typed
    pub args: Vec<&'a str>,
}

impl ParsedInput<'_> {
    /// The command the keyword names, if any.
    pub fn command(&self) -> Option<Command> {
        Command::from_keyword(&self.keyword)
    }
}

/// Split a line on whitespace into a keyword and arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<ParsedInput<'_>> {
    let mut words = line.split_whitespace();
    let keyword = words.next()?.to_lowercase();
    Some(ParsedInput {
        keyword,
        args: words.collect(),
    })
}

/// What the assistant does after handling a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and wait for the next command.
    Continue(String),

    /// Print the message and stop.
    Exit(String),
}

impl Reply {
    pub fn message(&self) -> &str {
        match self {
            Self::Continue(message) | Self::Exit(message) => message,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit(_))
    }
}
