use alloc::format;
use alloc::string::String;
use chrono::{DateTime, Utc};

/// Formats the time between `earlier` and `later` as `MM:SS`.
///
/// Only the minute-of-hour and second-of-minute are shown, hours and days are dropped. A negative span does not
/// panic, it wraps around using floor arithmetic (`-1s` is `59:59`).
pub fn format_duration(later: DateTime<Utc>, earlier: DateTime<Utc>) -> String {
    let seconds = (later - earlier).num_milliseconds().div_euclid(1000);
    let minutes = seconds.div_euclid(60).rem_euclid(60);
    let seconds = seconds.rem_euclid(60);
    format!("{:02}:{:02}", minutes, seconds)
}
