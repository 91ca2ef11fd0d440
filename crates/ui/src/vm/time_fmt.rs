use chrono::{DateTime, Utc};

/// Calendar date for note footers, e.g. `Nov 14, 2023`.
#[must_use]
pub fn format_date(value: DateTime<Utc>) -> String {
    value.format("%b %-d, %Y").to_string()
}

/// Month and year for course metadata, e.g. `May 2023`.
#[must_use]
pub fn format_month(value: DateTime<Utc>) -> String {
    value.format("%B %Y").to_string()
}

/// Minutes as `45 min` or `1h 37m`.
#[must_use]
pub fn format_minutes(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes} min");
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {rest}m")
    }
}

/// Media position as `m:ss`. Negative and non-finite values read as zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_clock(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}
