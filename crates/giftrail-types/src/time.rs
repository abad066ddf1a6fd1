//! Relative-time display formatting for history timestamps.

use chrono::{DateTime, Utc};

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 3_600_000;
const DAY_MS: i64 = 86_400_000;
const MONTH_MS: i64 = 2_592_000_000; // 30 days

/// Format `then` relative to `now` as a human-readable elapsed string.
///
/// Timestamps in the future (clock skew across tabs) clamp to "just now".
#[must_use]
pub fn format_time_elapsed(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(then).num_milliseconds();

    if diff < MINUTE_MS {
        return "just now".to_string();
    }
    if diff < HOUR_MS {
        let mins = diff / MINUTE_MS;
        return format!("{mins} minute{} ago", plural(mins));
    }
    if diff < DAY_MS {
        let hours = diff / HOUR_MS;
        return format!("{hours} hour{} ago", plural(hours));
    }
    if diff < MONTH_MS {
        let days = diff / DAY_MS;
        return format!("{days} day{} ago", plural(days));
    }
    let months = diff / MONTH_MS;
    format!("{months} month{} ago", plural(months))
}

fn plural(n: i64) -> &'static str {
    if n == 1 { "" } else { "s" }
}
