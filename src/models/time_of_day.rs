//! Time-of-day and calendar date parsing.
//!
//! Times are exchanged as zero-padded `HH:MM:SS` strings. Input may omit
//! the seconds (`08:00`) or the leading zero of the hour (`8:00`); both
//! normalize to `08:00:00`. Zero-padded tokens sort lexicographically in
//! chronological order, which the preview relies on.

use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::error::ParseError;

/// Parses `H:MM`, `HH:MM` or `HH:MM:SS`.
///
/// Hour must be 0-23, minute and second 0-59.
pub fn parse_time(raw: &str) -> Result<NaiveTime, ParseError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(ParseError::Empty);
    }
    let invalid = || ParseError::InvalidTime(s.to_string());

    let parts: Vec<&str> = s.split(':').collect();
    let (h, m, sec) = match parts.as_slice() {
        [h, m] => (*h, *m, "00"),
        [h, m, sec] => (*h, *m, *sec),
        _ => return Err(invalid()),
    };

    let hour_ok = (1..=2).contains(&h.len());
    if !hour_ok || m.len() != 2 || sec.len() != 2 {
        return Err(invalid());
    }
    let field = |v: &str| -> Result<u32, ParseError> {
        if !v.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        v.parse().map_err(|_| invalid())
    };

    NaiveTime::from_hms_opt(field(h)?, field(m)?, field(sec)?).ok_or_else(invalid)
}

/// Formats a time as `HH:MM:SS`.
pub fn format_time(t: NaiveTime) -> String {
    format!("{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second())
}

/// Normalizes a time entry to `HH:MM:SS`, or `None` if unrecognizable.
///
/// ```
/// use dose_schedule::models::normalize_time;
///
/// assert_eq!(normalize_time("08:00").as_deref(), Some("08:00:00"));
/// assert_eq!(normalize_time("08:00:00").as_deref(), Some("08:00:00"));
/// assert_eq!(normalize_time("8am"), None);
/// ```
pub fn normalize_time(raw: &str) -> Option<String> {
    parse_time(raw).ok().map(format_time)
}

/// Normalizes a list of time entries.
///
/// Unrecognizable entries are dropped. The result is sorted ascending
/// with duplicates removed.
pub fn normalize_times<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let mut times: Vec<String> = raw
        .iter()
        .filter_map(|t| {
            let normalized = normalize_time(t.as_ref());
            if normalized.is_none() && !t.as_ref().trim().is_empty() {
                tracing::debug!(entry = t.as_ref(), "dropping unrecognized time entry");
            }
            normalized
        })
        .collect();
    times.sort();
    times.dedup();
    times
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ParseError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(ParseError::Empty);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ParseError::InvalidDate(s.to_string()))
}

/// Formats a date as its `YYYY-MM-DD` day key.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_adds_seconds() {
        assert_eq!(normalize_time("08:00").as_deref(), Some("08:00:00"));
        assert_eq!(normalize_time("8:05").as_deref(), Some("08:05:00"));
        assert_eq!(normalize_time(" 20:30 ").as_deref(), Some("20:30:00"));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for t in ["00:00:00", "08:00:00", "23:59:59", "12:34:56"] {
            let once = normalize_time(t).unwrap();
            assert_eq!(once, t);
            assert_eq!(normalize_time(&once).unwrap(), once);
        }
    }

    #[test]
    fn test_normalize_rejects_garbage() {
        for t in ["", "   ", "8", "8am", "24:00", "12:60", "12:00:60", "1:2", "123:00", "12:00:00:00", "+1:00", "aa:bb"] {
            assert_eq!(normalize_time(t), None, "expected {t:?} to be rejected");
        }
    }

    #[test]
    fn test_normalize_times_sorts_and_dedups() {
        let times = normalize_times(&["20:00", "bogus", "08:00", "08:00:00", ""]);
        assert_eq!(times, vec!["08:00:00".to_string(), "20:00:00".to_string()]);
    }

    #[test]
    fn test_normalize_times_empty() {
        let empty: [&str; 0] = [];
        assert!(normalize_times(&empty).is_empty());
        assert!(normalize_times(&["x", "25:00"]).is_empty());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-01-10"), Ok(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()));
        assert_eq!(parse_date(""), Err(ParseError::Empty));
        assert!(matches!(parse_date("2025-02-30"), Err(ParseError::InvalidDate(_))));
        assert!(matches!(parse_date("10/01/2025"), Err(ParseError::InvalidDate(_))));
    }

    #[test]
    fn test_day_key() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(day_key(d), "2025-03-07");
    }
}
