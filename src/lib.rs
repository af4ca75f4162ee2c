//! Recurring dose schedules and their lookahead preview.
//!
//! Provides the models for a recurring medication schedule (weekdays,
//! times of day, optional date bounds) and a pure preview engine that
//! expands a schedule into concrete occurrences for the coming days.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ScheduleDefinition`, `DayConstraint`,
//!   `Weekday`, `DateWindow`, `Occurrence`, `DayGroup`
//! - **`scheduler`**: `build_preview`, the lenient occurrence expander
//! - **`validation`**: Strict checks before a schedule is submitted
//! - **`wire`**: Backend payload with an explicit weekday list
//! - **`config`**: Lookahead default and validation limits
//!
//! # Leniency
//!
//! The preview never fails: unparseable dates are ignored and
//! unrecognizable times are skipped. Use `validation` where malformed
//! input should be reported instead.

pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod wire;

pub use config::PreviewConfig;
pub use error::ParseError;
