//! Preview output records.
//!
//! Transient view models produced fresh on every preview call. They
//! carry no identity and are not meant to be cached or persisted.

use serde::{Deserialize, Serialize};

/// One concrete dose instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// Calendar day, `YYYY-MM-DD`.
    pub day_key: String,
    /// Time of day, `HH:MM:SS`.
    pub time: String,
    /// Display label, e.g. `"2 tablets"`.
    pub label: String,
}

/// All occurrences on one calendar day, ordered by time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayGroup {
    /// Calendar day, `YYYY-MM-DD`.
    pub day_key: String,
    /// Human-readable day, e.g. `"Fri, Jan 10"`.
    pub day_label: String,
    /// Occurrences on this day, time ascending.
    pub items: Vec<Occurrence>,
}

impl DayGroup {
    /// Number of occurrences on this day.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the day has no occurrences.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The times of this day's occurrences.
    pub fn times(&self) -> Vec<&str> {
        self.items.iter().map(|o| o.time.as_str()).collect()
    }
}
