//! Coarse "N units ago" strings for timestamps.

use chrono::{DateTime, Utc};

const UNITS: [(i64, &str); 5] = [
    (60 * 60 * 24 * 365, "year"),
    (60 * 60 * 24 * 30, "month"),
    (60 * 60 * 24, "day"),
    (60 * 60, "hour"),
    (60, "minute"),
];

pub fn time_ago(past: DateTime<Utc>) -> String {
    time_ago_since(past, Utc::now())
}

/// Picks the largest unit that fits at least once into the elapsed time,
/// falling back to seconds. Future timestamps are not clamped and yield a
/// negative second count.
pub fn time_ago_since(past: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - past).num_milliseconds().div_euclid(1000);
    for (unit_seconds, unit) in UNITS {
        let interval = seconds.div_euclid(unit_seconds);
        if interval >= 1 {
            return render(interval, unit);
        }
    }
    render(seconds, "second")
}

fn render(n: i64, unit: &str) -> String {
    let plural = if n == 1 { "" } else { "s" };
    format!("{} {}{} ago", n, unit, plural)
}
