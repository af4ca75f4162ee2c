//! Dose schedule domain models.
//!
//! Provides the input definition of a recurring dose schedule and the
//! transient records produced when previewing it.
//!
//! # Domain Mappings
//!
//! | dose-schedule | Form field | Backend |
//! |---------------|------------|---------|
//! | ScheduleDefinition | Dose schedule form | Dose schedule |
//! | DayConstraint | Weekday checkboxes | `daysOfWeek` |
//! | Occurrence | Preview row | Dose occurrence |
//! | DayGroup | Preview day heading | — |

mod calendar;
mod days;
mod definition;
mod preview;
mod time_of_day;
mod weekday;

pub use calendar::{DateWindow, MAX_LOOKAHEAD_DAYS};
pub use days::DayConstraint;
pub use definition::ScheduleDefinition;
pub use preview::{DayGroup, Occurrence};
pub use time_of_day::{day_key, format_time, normalize_time, normalize_times, parse_date, parse_time};
pub use weekday::Weekday;
