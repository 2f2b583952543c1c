//! Human-readable relative durations ("15 minutes", "an hour", "a few seconds").

use chrono::{DateTime, Duration, Utc};

/// Distance between `now` and `then` as words, without "in"/"ago".
///
/// Direction is ignored: a time in the past reads the same as one in the future.
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    humanize(then.signed_duration_since(now))
}

/// Formats a duration using fixed rounding thresholds.
pub fn humanize(duration: Duration) -> String {
    let seconds = duration.num_milliseconds().unsigned_abs() as f64 / 1000.0;
    let minutes = seconds / 60.0;
    let hours = minutes / 60.0;
    let days = hours / 24.0;

    if seconds < 45.0 {
        "a few seconds".to_string()
    } else if seconds < 90.0 {
        "a minute".to_string()
    } else if minutes < 45.0 {
        format!("{} minutes", round(minutes).max(2))
    } else if minutes < 90.0 {
        "an hour".to_string()
    } else if hours < 22.0 {
        format!("{} hours", round(hours).max(2))
    } else if hours < 36.0 {
        "a day".to_string()
    } else if days < 26.0 {
        format!("{} days", round(days).max(2))
    } else if days < 46.0 {
        "a month".to_string()
    } else if days < 320.0 {
        format!("{} months", round(days / 30.4).max(2))
    } else if days < 548.0 {
        "a year".to_string()
    } else {
        format!("{} years", round(days / 365.0).max(2))
    }
}

fn round(value: f64) -> u64 {
    value.round() as u64
}
