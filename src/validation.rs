//! Input validation for dose schedules.
//!
//! The preview is lenient: it ignores bad dates and skips bad times.
//! Before a definition is submitted as an authoritative schedule, run
//! [`validate_definition`] instead. It detects:
//! - Unparseable start/end dates
//! - Unrecognizable or duplicate times
//! - No times at all, or more than the configured maximum
//! - An end date before the start date
//! - A lookahead outside `1..=max_lookahead_days`
//!
//! All problems are collected; validation does not stop at the first.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::config::PreviewConfig;
use crate::error::ParseError;
use crate::models::{normalize_time, parse_date, ScheduleDefinition};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The start date is present but not a valid `YYYY-MM-DD` date.
    InvalidStartDate,
    /// The end date is present but not a valid `YYYY-MM-DD` date.
    InvalidEndDate,
    /// A time entry is not `HH:MM` or `HH:MM:SS`.
    InvalidTime,
    /// No valid times were given.
    NoTimes,
    /// Two entries normalize to the same time.
    DuplicateTime,
    /// More distinct times than the configured maximum.
    TooManyTimes,
    /// The end date is before the start date.
    InvertedDateRange,
    /// The lookahead is zero or exceeds the configured maximum.
    LookaheadOutOfRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a schedule definition.
///
/// Checks:
/// 1. Start and end dates, when present and non-blank, parse
/// 2. End date is not before start date
/// 3. Every non-blank time entry parses
/// 4. No two entries normalize to the same time
/// 5. At least one and at most `config.max_times` distinct times
/// 6. Lookahead is within `1..=config.max_lookahead_days`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_definition(definition: &ScheduleDefinition, config: &PreviewConfig) -> ValidationResult {
    let mut errors = Vec::new();

    let start = check_date(
        definition.start_date.as_deref(),
        ValidationErrorKind::InvalidStartDate,
        "start date",
        &mut errors,
    );
    let end = check_date(
        definition.end_date.as_deref(),
        ValidationErrorKind::InvalidEndDate,
        "end date",
        &mut errors,
    );
    if let (Some(s), Some(e)) = (start, end) {
        if e < s {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedDateRange,
                format!("End date {e} is before start date {s}"),
            ));
        }
    }

    // Check times
    let mut seen = HashSet::new();
    for raw in &definition.times {
        if raw.trim().is_empty() {
            continue;
        }
        match normalize_time(raw) {
            Some(t) => {
                if !seen.insert(t.clone()) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::DuplicateTime,
                        format!("Duplicate time: {t}"),
                    ));
                }
            }
            None => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTime,
                format!("Invalid time '{}' (expected HH:MM or HH:MM:SS)", raw.trim()),
            )),
        }
    }
    if seen.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoTimes,
            "Schedule has no valid times",
        ));
    } else if seen.len() > config.max_times {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooManyTimes,
            format!("{} times given, at most {} allowed", seen.len(), config.max_times),
        ));
    }

    if definition.lookahead_days == 0 || definition.lookahead_days > config.max_lookahead_days {
        errors.push(ValidationError::new(
            ValidationErrorKind::LookaheadOutOfRange,
            format!(
                "Lookahead of {} days is outside 1..={}",
                definition.lookahead_days, config.max_lookahead_days
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Parses an optional date field, recording an error if it is present but invalid.
fn check_date(
    raw: Option<&str>,
    kind: ValidationErrorKind,
    field: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<NaiveDate> {
    match parse_date(raw?) {
        Ok(date) => Some(date),
        Err(ParseError::Empty) => None,
        Err(e) => {
            errors.push(ValidationError::new(kind, format!("Invalid {field}: {e}")));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;

    fn valid_definition() -> ScheduleDefinition {
        ScheduleDefinition::new()
            .with_days([Weekday::Monday, Weekday::Wednesday])
            .with_times(["08:00", "20:00"])
            .with_start_date("2025-01-10")
            .with_end_date("2025-02-10")
            .with_quantity("1", "tablet")
    }

    fn kinds(def: &ScheduleDefinition) -> Vec<ValidationErrorKind> {
        validate_definition(def, &PreviewConfig::default())
            .unwrap_err()
            .into_iter()
            .map(|e| e.kind)
            .collect()
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_definition(&valid_definition(), &PreviewConfig::default()).is_ok());
    }

    #[test]
    fn test_blank_dates_are_absent() {
        let def = valid_definition().with_start_date("").with_end_date("  ");
        assert!(validate_definition(&def, &PreviewConfig::default()).is_ok());
    }

    #[test]
    fn test_invalid_dates() {
        let def = valid_definition()
            .with_start_date("2025-02-30")
            .with_end_date("tomorrow");
        let k = kinds(&def);
        assert!(k.contains(&ValidationErrorKind::InvalidStartDate));
        assert!(k.contains(&ValidationErrorKind::InvalidEndDate));
    }

    #[test]
    fn test_inverted_range() {
        let def = valid_definition()
            .with_start_date("2025-03-01")
            .with_end_date("2025-02-01");
        assert_eq!(kinds(&def), vec![ValidationErrorKind::InvertedDateRange]);
    }

    #[test]
    fn test_invalid_time() {
        let def = valid_definition().with_time("8pm");
        let errors = validate_definition(&def, &PreviewConfig::default()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidTime);
        assert!(errors[0].message.contains("8pm"));
    }

    #[test]
    fn test_duplicate_time() {
        let def = valid_definition().with_time("08:00:00");
        assert_eq!(kinds(&def), vec![ValidationErrorKind::DuplicateTime]);
    }

    #[test]
    fn test_no_times() {
        let def = valid_definition().with_times(Vec::<String>::new());
        assert_eq!(kinds(&def), vec![ValidationErrorKind::NoTimes]);

        let only_bad = valid_definition().with_times(["x"]);
        let k = kinds(&only_bad);
        assert!(k.contains(&ValidationErrorKind::InvalidTime));
        assert!(k.contains(&ValidationErrorKind::NoTimes));
    }

    #[test]
    fn test_too_many_times() {
        let config = PreviewConfig::default().with_max_times(2);
        let def = valid_definition().with_time("12:00");
        let errors = validate_definition(&def, &config).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::TooManyTimes);
    }

    #[test]
    fn test_lookahead_range() {
        let zero = valid_definition().with_lookahead_days(0);
        assert_eq!(kinds(&zero), vec![ValidationErrorKind::LookaheadOutOfRange]);

        let huge = valid_definition().with_lookahead_days(10_000);
        assert_eq!(kinds(&huge), vec![ValidationErrorKind::LookaheadOutOfRange]);
    }

    #[test]
    fn test_multiple_errors() {
        let def = ScheduleDefinition::new()
            .with_start_date("bad")
            .with_lookahead_days(0);
        let errors = validate_definition(&def, &PreviewConfig::default()).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
