//! Schedule expansion.
//!
//! Turns a recurring [`ScheduleDefinition`](crate::models::ScheduleDefinition)
//! into concrete occurrences over a lookahead window, for previewing a
//! schedule before it is submitted.
//!
//! # Algorithm
//!
//! `build_preview` walks the lookahead window day by day, keeps days that
//! fall inside the start/end bounds and match the weekday constraint, and
//! emits one occurrence per normalized time. It is a pure function: the
//! caller supplies "today".

mod preview;

pub use preview::{build_preview, build_preview_at, day_label};
