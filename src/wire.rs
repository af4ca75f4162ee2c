//! Backend wire shape for dose schedules.
//!
//! The backend never sees the "empty means every day" form encoding:
//! [`SchedulePayload::days_of_week`] is always an explicit weekday list,
//! all seven days for an every-day schedule. Times are normalized and
//! sorted, and dates are real dates or absent.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::PreviewConfig;
use crate::error::ParseError;
use crate::models::{
    day_key, format_time, parse_date, parse_time, DayConstraint, ScheduleDefinition, Weekday,
};
use crate::validation::{validate_definition, ValidationError};

/// A dose schedule as submitted to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulePayload {
    /// Active weekdays, Monday first. Never empty.
    pub days_of_week: Vec<Weekday>,
    /// Times of day, `HH:MM:SS`, ascending.
    pub times: Vec<String>,
    /// Inclusive first day.
    pub start_date: Option<NaiveDate>,
    /// Inclusive last day.
    pub end_date: Option<NaiveDate>,
    pub quantity_amount: String,
    pub quantity_unit: String,
}

impl SchedulePayload {
    /// Validates a definition and converts it to the wire shape.
    ///
    /// # Returns
    /// The payload, or every validation problem found.
    pub fn from_definition(
        definition: &ScheduleDefinition,
        config: &PreviewConfig,
    ) -> Result<Self, Vec<ValidationError>> {
        validate_definition(definition, config)?;

        Ok(Self {
            days_of_week: definition.days_of_week.to_wire(),
            times: definition.normalized_times(),
            start_date: definition.start_bound(),
            end_date: definition.end_bound(),
            quantity_amount: definition.quantity_amount.trim().to_string(),
            quantity_unit: definition.quantity_unit.trim().to_string(),
        })
    }

    /// Converts back to an editable definition.
    ///
    /// A full seven-day list becomes the every-day selection.
    pub fn to_definition(&self, config: &PreviewConfig) -> ScheduleDefinition {
        let mut definition = ScheduleDefinition::with_config(config)
            .with_day_constraint(DayConstraint::from_selection(self.days_of_week.iter().copied()))
            .with_times(self.times.iter().cloned())
            .with_quantity(self.quantity_amount.clone(), self.quantity_unit.clone());
        if let Some(start) = self.start_date {
            definition = definition.with_start_date(day_key(start));
        }
        if let Some(end) = self.end_date {
            definition = definition.with_end_date(day_key(end));
        }
        definition
    }

    /// Parses a payload whose weekdays, times and dates arrive as raw strings.
    ///
    /// Blank dates and blank time entries count as absent. Any other
    /// unparseable token is an error; times are normalized, sorted and
    /// de-duplicated.
    pub fn from_raw<S: AsRef<str>, T: AsRef<str>>(
        days_of_week: &[S],
        times: &[T],
        start_date: Option<&str>,
        end_date: Option<&str>,
        quantity_amount: impl Into<String>,
        quantity_unit: impl Into<String>,
    ) -> Result<Self, ParseError> {
        let days = DayConstraint::from_wire(days_of_week)?;

        let mut normalized = times
            .iter()
            .map(|t| t.as_ref())
            .filter(|t| !t.trim().is_empty())
            .map(|t| parse_time(t).map(format_time))
            .collect::<Result<Vec<_>, _>>()?;
        normalized.sort();
        normalized.dedup();

        Ok(Self {
            days_of_week: days.to_wire(),
            times: normalized,
            start_date: optional_date(start_date)?,
            end_date: optional_date(end_date)?,
            quantity_amount: quantity_amount.into(),
            quantity_unit: quantity_unit.into(),
        })
    }
}

/// Parses an optional date, treating a blank value as absent.
fn optional_date(raw: Option<&str>) -> Result<Option<NaiveDate>, ParseError> {
    match raw.map(parse_date) {
        None | Some(Err(ParseError::Empty)) => Ok(None),
        Some(result) => result.map(Some),
    }
}
