//! Parse errors for schedule tokens.
//!
//! Raised by the strict parsers (`Weekday::from_str`, [`parse_date`],
//! [`parse_time`]). The preview engine swallows these and falls back;
//! validation turns them into [`ValidationError`](crate::validation::ValidationError)s.
//!
//! [`parse_date`]: crate::models::parse_date
//! [`parse_time`]: crate::models::parse_time

use thiserror::Error;

/// A token could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input was blank.
    #[error("empty value")]
    Empty,

    /// Not a full weekday name.
    #[error("unknown weekday: {0}")]
    InvalidWeekday(String),

    /// Not `H:MM`, `HH:MM` or `HH:MM:SS`, or a field out of range.
    #[error("invalid time of day (expected HH:MM or HH:MM:SS): {0}")]
    InvalidTime(String),

    /// Not a real `YYYY-MM-DD` calendar date.
    #[error("invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),
}
