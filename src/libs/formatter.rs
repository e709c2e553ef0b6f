//! Date and time parsing and formatting for user input and display.
//!
//! Tasks carry a calendar date and an independent time of day. Both are
//! exchanged with the user (and the task file) as short strings, so every
//! parse and format in the application goes through the two formats defined
//! here to stay consistent:
//!
//! - Dates use `%Y-%m-%d` (e.g. "2025-05-01")
//! - Times use `%H:%M` (e.g. "08:30"; seconds are never displayed)
//!
//! Parsing is strict: a token that does not match the expected format is
//! rejected with a [`ParseError`] naming the offending input, and the caller
//! decides whether to abort the operation or skip the field. No partial or
//! "best effort" values are ever produced.
//!
//! ## Examples
//!
//! ```rust
//! use tasq::libs::formatter::{parse_date, parse_time, format_due};
//!
//! let date = parse_date("2025-05-01").unwrap();
//! let time = parse_time("08:30").unwrap();
//! assert_eq!(format_due(&date, &time), "2025-05-01 08:30");
//!
//! assert!(parse_date("01/05/2025").is_err());
//! assert!(parse_time("25:00").is_err());
//! ```

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// Calendar date format used for prompts, display, and the task file.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time-of-day format used for prompts, display, and the task file.
pub const TIME_FORMAT: &str = "%H:%M";

/// A user-supplied token that could not be interpreted.
///
/// These are input errors, not system failures: the handler reports them
/// and the application keeps running with no state change for the
/// rejected token.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid date '{0}', expected format yyyy-mm-dd")]
    InvalidDate(String),
    #[error("invalid time '{0}', expected format HH:MM")]
    InvalidTime(String),
    #[error("invalid priority '{0}', expected 1 (High), 2 (Medium) or 3 (Low)")]
    InvalidPriority(String),
}

/// Parses a calendar date in `%Y-%m-%d` format.
pub fn parse_date(input: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| ParseError::InvalidDate(input.trim().to_string()))
}

/// Parses a time of day in `%H:%M` format.
pub fn parse_time(input: &str) -> Result<NaiveTime, ParseError> {
    NaiveTime::parse_from_str(input.trim(), TIME_FORMAT).map_err(|_| ParseError::InvalidTime(input.trim().to_string()))
}

/// Formats a due date and time pair for display ("2025-05-01 08:30").
pub fn format_due(date: &NaiveDate, time: &NaiveTime) -> String {
    format!("{} {}", date.format(DATE_FORMAT), time.format(TIME_FORMAT))
}
