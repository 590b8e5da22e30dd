//! Shared helpers for driving a full assistant session in tests.
//!
//! The assistant runs against an in-memory script and a pinned clock, and
//! the captured output is split back into one reply per command.

use chrono::NaiveDate;
use contact_book::{Assistant, Config, FixedClock};

const PROMPT: &str = "$ ";

/// Monday 3 June 2024, the reference "today" for session tests.
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
}

/// Build an assistant with a fixed date and a short prompt.
pub fn assistant_on(today: NaiveDate) -> Assistant<FixedClock> {
    let config = Config {
        prompt: PROMPT.to_string(),
        ..Config::default()
    };
    Assistant::with_clock(config, FixedClock::new(today))
}

/// Run `lines` through a fresh assistant and return the replies in order.
///
/// Blank lines produce an empty entry, since the prompt is printed again
/// without a reply.
pub fn run_session(today: NaiveDate, lines: &[&str]) -> Vec<String> {
    let mut assistant = assistant_on(today);
    let script = lines.join("\n") + "\n";
    let mut output = Vec::new();
    assistant
        .run(script.as_bytes(), &mut output)
        .expect("in-memory session should not fail");

    let output = String::from_utf8(output).expect("output is UTF-8");
    let body = output
        .strip_prefix("Welcome to the assistant bot!\n")
        .expect("session starts with the welcome banner");

    body.split(PROMPT)
        .skip(1)
        .map(|reply| reply.trim_end_matches('\n').to_string())
        .collect()
}
