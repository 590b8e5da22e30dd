//! The interactive assistant loop.
//!
//! [`Assistant`] owns the address book for the lifetime of the process,
//! reads commands line by line and writes one reply per command. Input and
//! output are generic so the loop can be driven from tests.

use crate::book::{AddressBook, Clock, SystemClock};
use crate::commands::{handlers, parse_input, Command, Reply};
use crate::config::Config;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

const WELCOME: &str = "Welcome to the assistant bot!";
const GREETING: &str = "How can I help you?";
const FAREWELL: &str = "Good bye!";
const INVALID_COMMAND: &str = "Invalid command.";

/// Command-line assistant holding the address book.
pub struct Assistant<C: Clock = SystemClock> {
    book: AddressBook,
    clock: C,
    config: Config,
}

impl Assistant<SystemClock> {
    /// Create an assistant that reads today's date from the system clock.
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Assistant<C> {
    /// Create an assistant with a custom clock.
    pub fn with_clock(config: Config, clock: C) -> Self {
        Self {
            book: AddressBook::new(),
            clock,
            config,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Handle one line of input.
    ///
    /// Returns `None` for a blank line. Failures are turned into a reply;
    /// nothing here ends the session except `close`/`exit`.
    pub fn handle(&mut self, line: &str) -> Option<Reply> {
        let input = parse_input(line)?;

        let Some(command) = input.command() else {
            warn!(keyword = %input.keyword, "Unknown command");
            return Some(Reply::Continue(INVALID_COMMAND.to_string()));
        };

        debug!(%command, args = input.args.len(), "Dispatching command");

        let args = input.args.as_slice();
        let result = match command {
            Command::Exit => return Some(Reply::Exit(FAREWELL.to_string())),
            Command::Hello => Ok(GREETING.to_string()),
            Command::Add => handlers::add_contact(args, &mut self.book),
            Command::Change => handlers::change_contact(args, &mut self.book),
            Command::Phone => handlers::show_phone(args, &self.book),
            Command::All => handlers::show_all(&self.book),
            Command::AddBirthday => handlers::add_birthday(args, &mut self.book),
            Command::ShowBirthday => handlers::show_birthday(args, &self.book),
            Command::Birthdays => handlers::birthdays(
                &self.book,
                self.clock.today(),
                self.config.birthday_window_days,
            ),
        };

        let message = result.unwrap_or_else(|e| {
            warn!(%command, field = e.field(), error = ?e, "Command rejected");
            e.to_string()
        });
        Some(Reply::Continue(message))
    }

    /// Run the read-eval-print loop until `close`/`exit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        info!("Assistant session started");
        writeln!(output, "{}", WELCOME)?;

        let mut buf = Vec::new();
        loop {
            write!(output, "{}", self.config.prompt)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                debug!("End of input");
                writeln!(output, "{}", FAREWELL)?;
                break;
            }

            // Undecodable bytes become U+FFFD and fall through as an unknown command.
            let line = String::from_utf8_lossy(&buf);
            if let Some(reply) = self.handle(&line) {
                writeln!(output, "{}", reply.message())?;
                if reply.is_exit() {
                    break;
                }
            }
        }

        info!(contacts = self.book.len(), "Assistant session finished");
        Ok(())
    }
}
