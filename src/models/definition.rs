//! Recurring dose schedule definition.
//!
//! Holds the user-editable fields of a schedule form as entered. Dates
//! and times stay as raw strings so that a half-typed form can still be
//! previewed; the accessors here apply the lenient interpretation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{normalize_times, parse_date, DayConstraint, Weekday};
use crate::config::PreviewConfig;

/// A recurring dose schedule, as edited in a form.
///
/// # Examples
///
/// ```
/// use dose_schedule::models::{ScheduleDefinition, Weekday};
///
/// let def = ScheduleDefinition::new()
///     .with_days([Weekday::Monday, Weekday::Friday])
///     .with_time("08:00")
///     .with_time("20:00")
///     .with_quantity("2", "tablets");
///
/// assert_eq!(def.label(), "2 tablets");
/// assert_eq!(def.normalized_times(), vec!["08:00:00", "20:00:00"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDefinition {
    /// Weekdays the schedule is active on.
    pub days_of_week: DayConstraint,
    /// Times of day as entered. Unrecognizable entries are ignored by the preview.
    pub times: Vec<String>,
    /// Inclusive first day (`YYYY-MM-DD`). `None` = today.
    pub start_date: Option<String>,
    /// Inclusive last day (`YYYY-MM-DD`). `None` = unbounded.
    pub end_date: Option<String>,
    /// Dose amount, echoed into occurrence labels.
    pub quantity_amount: String,
    /// Dose unit, echoed into occurrence labels.
    pub quantity_unit: String,
    /// Consecutive days to expand, today included.
    pub lookahead_days: u32,
}

impl Default for ScheduleDefinition {
    fn default() -> Self {
        Self::with_config(&PreviewConfig::default())
    }
}

impl ScheduleDefinition {
    /// Creates an every-day definition with no times and the default lookahead.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty definition using the configured lookahead.
    pub fn with_config(config: &PreviewConfig) -> Self {
        Self {
            days_of_week: DayConstraint::AllDays,
            times: Vec::new(),
            start_date: None,
            end_date: None,
            quantity_amount: String::new(),
            quantity_unit: String::new(),
            lookahead_days: config.lookahead_days,
        }
    }

    /// Sets the weekdays from a form selection (empty = every day).
    pub fn with_days(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.days_of_week = DayConstraint::from_selection(days);
        self
    }

    /// Sets the day constraint directly.
    pub fn with_day_constraint(mut self, constraint: DayConstraint) -> Self {
        self.days_of_week = constraint;
        self
    }

    /// Adds a time of day.
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.times.push(time.into());
        self
    }

    /// Replaces the times of day.
    pub fn with_times<S: Into<String>>(mut self, times: impl IntoIterator<Item = S>) -> Self {
        self.times = times.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the inclusive start date.
    pub fn with_start_date(mut self, date: impl Into<String>) -> Self {
        self.start_date = Some(date.into());
        self
    }

    /// Sets the inclusive end date.
    pub fn with_end_date(mut self, date: impl Into<String>) -> Self {
        self.end_date = Some(date.into());
        self
    }

    /// Sets the dose amount and unit.
    pub fn with_quantity(mut self, amount: impl Into<String>, unit: impl Into<String>) -> Self {
        self.quantity_amount = amount.into();
        self.quantity_unit = unit.into();
        self
    }

    /// Sets the lookahead window length.
    pub fn with_lookahead_days(mut self, days: u32) -> Self {
        self.lookahead_days = days;
        self
    }

    /// Display label for each occurrence: `"<amount> <unit>"`.
    pub fn label(&self) -> String {
        format!("{} {}", self.quantity_amount.trim(), self.quantity_unit.trim())
            .trim()
            .to_string()
    }

    /// Valid times, normalized to `HH:MM:SS`, sorted and de-duplicated.
    pub fn normalized_times(&self) -> Vec<String> {
        normalize_times(&self.times)
    }

    /// Parsed start date, or `None` if absent or unparseable.
    pub fn start_bound(&self) -> Option<NaiveDate> {
        lenient_date(self.start_date.as_deref(), "start_date")
    }

    /// Parsed end date, or `None` if absent or unparseable.
    pub fn end_bound(&self) -> Option<NaiveDate> {
        lenient_date(self.end_date.as_deref(), "end_date")
    }
}

fn lenient_date(raw: Option<&str>, field: &'static str) -> Option<NaiveDate> {
    let raw = raw?;
    match parse_date(raw) {
        Ok(date) => Some(date),
        Err(e) => {
            if !raw.trim().is_empty() {
                tracing::debug!(field, value = raw, error = %e, "ignoring unparseable date bound");
            }
            None
        }
    }
}
