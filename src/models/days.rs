//! Day-of-week constraints.
//!
//! Form state encodes "every day" as an empty selection, while the
//! backend stores an explicit list of all seven days. [`DayConstraint`]
//! makes the choice explicit so neither encoding leaks into the other.
//!
//! # Translation rules
//! - form selection: empty or all seven ⇒ [`DayConstraint::AllDays`]
//! - wire: [`DayConstraint::AllDays`] ⇒ all seven tokens, Monday first
//!
//! An empty `SpecificDays` set, however it was built, behaves as
//! [`DayConstraint::AllDays`]. Deserialization normalizes it away.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::Weekday;
use crate::error::ParseError;

/// Which weekdays a schedule is active on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "kind",
    content = "days",
    rename_all = "snake_case",
    from = "SerializedDayConstraint"
)]
pub enum DayConstraint {
    /// Active every day of the week.
    #[default]
    AllDays,
    /// Active only on the listed weekdays. An empty set counts as every day.
    SpecificDays(BTreeSet<Weekday>),
}

/// Deserialized form, before empty and complete sets are folded into `AllDays`.
#[derive(Deserialize)]
#[serde(tag = "kind", content = "days", rename_all = "snake_case")]
enum SerializedDayConstraint {
    AllDays,
    SpecificDays(BTreeSet<Weekday>),
}

impl From<SerializedDayConstraint> for DayConstraint {
    fn from(raw: SerializedDayConstraint) -> Self {
        match raw {
            SerializedDayConstraint::AllDays => DayConstraint::AllDays,
            SerializedDayConstraint::SpecificDays(set) => DayConstraint::from_selection(set),
        }
    }
}

impl DayConstraint {
    /// Builds a constraint from a UI selection.
    ///
    /// An empty selection means every day, as does a selection of all seven.
    pub fn from_selection(days: impl IntoIterator<Item = Weekday>) -> Self {
        let set: BTreeSet<Weekday> = days.into_iter().collect();
        if set.is_empty() || set.len() == Weekday::ALL.len() {
            DayConstraint::AllDays
        } else {
            DayConstraint::SpecificDays(set)
        }
    }

    /// Parses a backend weekday list.
    ///
    /// Unknown tokens are an error; an empty or complete list maps to
    /// [`DayConstraint::AllDays`].
    pub fn from_wire<S: AsRef<str>>(tokens: &[S]) -> Result<Self, ParseError> {
        let days = tokens
            .iter()
            .map(|t| t.as_ref().parse::<Weekday>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_selection(days))
    }

    /// Explicit weekday list for the backend, Monday first.
    pub fn to_wire(&self) -> Vec<Weekday> {
        match self.specific() {
            None => Weekday::ALL.to_vec(),
            Some(set) => set.iter().copied().collect(),
        }
    }

    /// The selection to show in a form. Empty for every day.
    pub fn to_selection(&self) -> Vec<Weekday> {
        match self.specific() {
            None => Vec::new(),
            Some(set) => set.iter().copied().collect(),
        }
    }

    /// Whether the schedule is active on `day`.
    #[inline]
    pub fn matches(&self, day: Weekday) -> bool {
        self.specific().map_or(true, |set| set.contains(&day))
    }

    /// Whether this is the every-day constraint.
    pub fn is_all_days(&self) -> bool {
        self.specific().is_none()
    }

    /// The restricting set, or `None` when every day qualifies.
    fn specific(&self) -> Option<&BTreeSet<Weekday>> {
        match self {
            DayConstraint::SpecificDays(set) if !set.is_empty() => Some(set),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_is_all_days() {
        let c = DayConstraint::from_selection(Vec::new());
        assert!(c.is_all_days());
        for d in Weekday::ALL {
            assert!(c.matches(d));
        }
    }

    #[test]
    fn test_full_selection_is_all_days() {
        let c = DayConstraint::from_selection(Weekday::ALL);
        assert_eq!(c, DayConstraint::AllDays);
    }

    #[test]
    fn test_specific_days() {
        let c = DayConstraint::from_selection([Weekday::Monday, Weekday::Thursday, Weekday::Monday]);
        assert!(c.matches(Weekday::Monday));
        assert!(c.matches(Weekday::Thursday));
        assert!(!c.matches(Weekday::Friday));
        assert_eq!(c.to_selection(), vec![Weekday::Monday, Weekday::Thursday]);
    }

    #[test]
    fn test_all_days_wire_is_explicit() {
        let wire = DayConstraint::AllDays.to_wire();
        assert_eq!(wire.len(), 7);
        assert_eq!(wire[0], Weekday::Monday);
        assert_eq!(wire[6], Weekday::Sunday);
        assert!(DayConstraint::AllDays.to_selection().is_empty());
    }

    #[test]
    fn test_specific_wire_is_sorted() {
        let c = DayConstraint::from_selection([Weekday::Sunday, Weekday::Tuesday]);
        assert_eq!(c.to_wire(), vec![Weekday::Tuesday, Weekday::Sunday]);
    }

    #[test]
    fn test_from_wire() {
        let all = DayConstraint::from_wire(&[
            "MONDAY", "TUESDAY", "WEDNESDAY", "THURSDAY", "FRIDAY", "SATURDAY", "SUNDAY",
        ])
        .unwrap();
        assert!(all.is_all_days());

        let some = DayConstraint::from_wire(&["friday"]).unwrap();
        assert_eq!(some.to_wire(), vec![Weekday::Friday]);

        assert!(DayConstraint::from_wire(&["FUNDAY"]).is_err());
    }

    #[test]
    fn test_empty_specific_days_means_every_day() {
        let c = DayConstraint::SpecificDays(BTreeSet::new());
        assert!(c.is_all_days());
        assert!(Weekday::ALL.into_iter().all(|d| c.matches(d)));
        assert_eq!(c.to_wire(), Weekday::ALL.to_vec());
        assert!(c.to_selection().is_empty());
    }

    #[test]
    fn test_deserialize_normalizes_sets() {
        let empty: DayConstraint =
            serde_json::from_str(r#"{"kind":"specific_days","days":[]}"#).unwrap();
        assert_eq!(empty, DayConstraint::AllDays);

        let full: DayConstraint = serde_json::from_str(
            r#"{"kind":"specific_days","days":["MONDAY","TUESDAY","WEDNESDAY","THURSDAY","FRIDAY","SATURDAY","SUNDAY"]}"#,
        )
        .unwrap();
        assert_eq!(full, DayConstraint::AllDays);

        let some: DayConstraint =
            serde_json::from_str(r#"{"kind":"specific_days","days":["FRIDAY"]}"#).unwrap();
        assert_eq!(some, DayConstraint::from_selection([Weekday::Friday]));

        let all: DayConstraint = serde_json::from_str(r#"{"kind":"all_days"}"#).unwrap();
        assert_eq!(all, DayConstraint::AllDays);
    }
}
