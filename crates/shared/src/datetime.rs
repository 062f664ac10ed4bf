//! Date/time formatting for timeline labels.
//!
//! Absolute timestamps are rendered as `"<time>; <date>"` by default and split on
//! the `;` separator into two labels. Relative rendering follows the familiar
//! "a few seconds ago" / "in 3 days" style. Absolute labels are rendered in the
//! viewer's UTC offset; relative ones do not depend on it.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use std::fmt::{self, Write};

/// Default absolute format: time first, then date, separated by `;`.
pub const DEFAULT_DATE_TIME_FORMAT: &str = "%I:%M %p; %d/%m/%Y";

/// Separator between the two halves of a formatted timestamp.
pub const DATE_TIME_SEPARATOR: char = ';';

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Largest accepted UTC offset magnitude, in minutes.
pub const MAX_UTC_OFFSET_MINUTES: i32 = 24 * 60 - 1;

/// Offset east of UTC given in minutes, e.g. `330` for `+05:30`.
pub fn utc_offset(minutes: i32) -> Option<FixedOffset> {
    FixedOffset::east_opt(minutes.checked_mul(60)?)
}

/// Formats a timestamp with a chrono format string, in the timestamp's own zone.
///
/// An unusable format string falls back to RFC 3339 rather than panicking.
pub fn format_date_time<Tz>(timestamp: DateTime<Tz>, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut out = String::new();
    if write!(out, "{}", timestamp.format(format)).is_err() {
        return timestamp.to_rfc3339();
    }
    out
}

/// Formats a timestamp and splits it on the first `;` into two trimmed labels.
///
/// With the default format the first label is the time and the second the date.
/// If the format has no separator the second label is empty.
pub fn split_date_time<Tz>(timestamp: DateTime<Tz>, format: &str) -> (String, String)
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let formatted = format_date_time(timestamp, format);
    match formatted.split_once(DATE_TIME_SEPARATOR) {
        Some((first, second)) => (first.trim().to_string(), second.trim().to_string()),
        None => (formatted.trim().to_string(), String::new()),
    }
}

/// Renders `timestamp` relative to `now`, e.g. `"2 hours ago"` or `"in a day"`.
pub fn relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(timestamp).num_seconds();
    let phrase = humanize_seconds(delta.abs());

    if delta < 0 {
        format!("in {}", phrase)
    } else {
        format!("{} ago", phrase)
    }
}

fn humanize_seconds(secs: i64) -> String {
    if secs < 45 {
        return "a few seconds".to_string();
    }
    if secs < 90 {
        return "a minute".to_string();
    }
    if secs < 45 * MINUTE {
        return format!("{} minutes", (secs + MINUTE / 2) / MINUTE);
    }
    if secs < 90 * MINUTE {
        return "an hour".to_string();
    }
    if secs < 22 * HOUR {
        return format!("{} hours", (secs + HOUR / 2) / HOUR);
    }
    if secs < 36 * HOUR {
        return "a day".to_string();
    }

    let days = (secs + DAY / 2) / DAY;
    if days < 26 {
        return format!("{} days", days);
    }
    if days < 46 {
        return "a month".to_string();
    }
    if days < 320 {
        return format!("{} months", (days as f64 / 30.4).round() as i64);
    }
    if days < 548 {
        return "a year".to_string();
    }
    format!("{} years", (days as f64 / 365.0).round() as i64)
}
