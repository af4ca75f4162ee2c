//! Preview configuration.

use serde::{Deserialize, Serialize};

use crate::models::MAX_LOOKAHEAD_DAYS;

/// Limits and defaults applied to schedule definitions.
///
/// Deserializes with defaults for any missing field, so an empty JSON
/// object yields [`PreviewConfig::default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Days to expand when a definition does not set its own window.
    pub lookahead_days: u32,
    /// Largest lookahead accepted by validation. The preview itself never
    /// expands more than [`MAX_LOOKAHEAD_DAYS`].
    pub max_lookahead_days: u32,
    /// Largest number of distinct times per day accepted by validation.
    pub max_times: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            lookahead_days: 7,
            max_lookahead_days: MAX_LOOKAHEAD_DAYS,
            max_times: 24,
        }
    }
}

impl PreviewConfig {
    /// Sets the default lookahead.
    pub fn with_lookahead_days(mut self, days: u32) -> Self {
        self.lookahead_days = days;
        self
    }

    /// Sets the validation cap on lookahead.
    pub fn with_max_lookahead_days(mut self, days: u32) -> Self {
        self.max_lookahead_days = days;
        self
    }

    /// Sets the validation cap on times per day.
    pub fn with_max_times(mut self, max: usize) -> Self {
        self.max_times = max;
        self
    }
}
