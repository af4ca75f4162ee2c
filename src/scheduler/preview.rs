//! Lookahead preview of a recurring dose schedule.
//!
//! # Algorithm
//!
//! 1. Resolve the effective [`DateWindow`]: `[today, today + lookahead - 1]`
//!    narrowed by the definition's start/end dates.
//! 2. Normalize the time entries (invalid ones dropped, sorted, deduplicated).
//! 3. For each day in the window whose weekday satisfies the
//!    [`DayConstraint`](crate::models::DayConstraint), emit one occurrence per time.
//! 4. Group by day; groups ascend by day key, items by time.
//!
//! # Complexity
//! O(d * t) where d=lookahead days (at most
//! [`MAX_LOOKAHEAD_DAYS`](crate::models::MAX_LOOKAHEAD_DAYS)), t=distinct times.
//!
//! The preview never fails. Malformed dates fall back to their defaults
//! and malformed times are skipped; an empty result is a normal outcome.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::models::{day_key, DateWindow, DayGroup, Occurrence, ScheduleDefinition, Weekday};

/// Expands `definition` into day-grouped occurrences, anchored at `today`.
///
/// Deterministic for identical arguments.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use dose_schedule::models::{ScheduleDefinition, Weekday};
/// use dose_schedule::scheduler::build_preview;
///
/// let def = ScheduleDefinition::new()
///     .with_days([Weekday::Monday])
///     .with_time("09:00")
///     .with_quantity("1", "tablet");
///
/// // 2025-01-10 is a Friday; the only Monday in the next 7 days is the 13th.
/// let today = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
/// let groups = build_preview(&def, today);
///
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].day_key, "2025-01-13");
/// assert_eq!(groups[0].items[0].time, "09:00:00");
/// assert_eq!(groups[0].items[0].label, "1 tablet");
/// ```
pub fn build_preview(definition: &ScheduleDefinition, today: NaiveDate) -> Vec<DayGroup> {
    let times = definition.normalized_times();
    if times.is_empty() {
        tracing::trace!("no valid times, empty preview");
        return Vec::new();
    }

    let Some(window) = DateWindow::resolve(definition, today) else {
        tracing::trace!("zero-day lookahead, empty preview");
        return Vec::new();
    };

    let label = definition.label();
    let mut by_day: BTreeMap<NaiveDate, Vec<Occurrence>> = BTreeMap::new();

    for date in window.days() {
        if !definition.days_of_week.matches(Weekday::from(date.weekday())) {
            continue;
        }
        let key = day_key(date);
        let items = by_day.entry(date).or_default();
        for time in &times {
            items.push(Occurrence {
                day_key: key.clone(),
                time: time.clone(),
                label: label.clone(),
            });
        }
    }

    let groups: Vec<DayGroup> = by_day
        .into_iter()
        .map(|(date, mut items)| {
            items.sort_by(|a, b| a.time.cmp(&b.time));
            DayGroup {
                day_key: day_key(date),
                day_label: day_label(date),
                items,
            }
        })
        .collect();

    tracing::trace!(
        today = %today,
        window_days = window.len_days(),
        days = groups.len(),
        occurrences = groups.iter().map(DayGroup::len).sum::<usize>(),
        "built schedule preview"
    );

    groups
}

/// Like [`build_preview`], anchored at the calendar day of `now`.
///
/// The time-of-day part of `now` is discarded (truncated to midnight).
pub fn build_preview_at(definition: &ScheduleDefinition, now: NaiveDateTime) -> Vec<DayGroup> {
    build_preview(definition, now.date())
}

/// Human-readable day heading, e.g. `"Fri, Jan 10"`.
pub fn day_label(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}
