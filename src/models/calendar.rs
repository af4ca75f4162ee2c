//! Date windows.
//!
//! A [`DateWindow`] is an inclusive range of calendar days. The preview
//! resolves one per call by intersecting the lookahead window
//! `[today, today + lookahead - 1]` with the definition's optional
//! start/end bounds.
//!
//! # Precedence
//! The tighter bound always wins:
//! - effective start = max(today, start date)
//! - effective end = min(today + lookahead - 1, end date)
//!
//! A window whose start is after its end is empty.
//!
//! The lookahead is capped at [`MAX_LOOKAHEAD_DAYS`] no matter what the
//! definition asks for.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::ScheduleDefinition;

/// Longest lookahead the preview will expand, in days.
pub const MAX_LOOKAHEAD_DAYS: u32 = 366;

/// An inclusive range of calendar days `[start, end]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    /// First day (inclusive).
    pub start: NaiveDate,
    /// Last day (inclusive).
    pub end: NaiveDate,
}

impl DateWindow {
    /// Creates a window. `start > end` yields an empty window.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The `days`-long window beginning at `start`.
    ///
    /// Returns `None` for a zero-length window.
    pub fn lookahead(start: NaiveDate, days: u32) -> Option<Self> {
        let span = days.checked_sub(1)?;
        let end = start
            .checked_add_days(Days::new(u64::from(span)))
            .unwrap_or(NaiveDate::MAX);
        Some(Self::new(start, end))
    }

    /// Resolves the effective window for a definition anchored at `today`.
    ///
    /// Unparseable start/end dates are ignored and the lookahead is capped
    /// at [`MAX_LOOKAHEAD_DAYS`]. Returns `None` when the lookahead is zero.
    pub fn resolve(definition: &ScheduleDefinition, today: NaiveDate) -> Option<Self> {
        let days = definition.lookahead_days.min(MAX_LOOKAHEAD_DAYS);
        if days < definition.lookahead_days {
            tracing::debug!(
                requested = definition.lookahead_days,
                capped = days,
                "capping preview lookahead"
            );
        }
        let window = Self::lookahead(today, days)?;
        Some(window.clamp(definition.start_bound(), definition.end_bound()))
    }

    /// Narrows the window by optional inclusive bounds.
    pub fn clamp(self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self {
            start: start.map_or(self.start, |s| s.max(self.start)),
            end: end.map_or(self.end, |e| e.min(self.end)),
        }
    }

    /// Whether the window contains no days.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of days in the window.
    pub fn len_days(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start).num_days() as u64 + 1
        }
    }

    /// Iterates the days of the window in chronological order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}
