use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

/// Divisors for relative time buckets, largest first. Months are 30 days and
/// years 365 days regardless of calendar position.
const INTERVALS: [(&str, i64); 6] = [
    ("year", 31_536_000),
    ("month", 2_592_000),
    ("week", 604_800),
    ("day", 86_400),
    ("hour", 3_600),
    ("minute", 60),
];

/// Format an amount as en-US dollars with no fraction digits, e.g. `$1,235`.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Render a backend timestamp for display, e.g. `Jan 5, 2026, 03:04 PM`.
///
/// Unparseable input is echoed back unchanged rather than rendered as a
/// placeholder.
pub fn format_date(timestamp: &str) -> String {
    match parse_timestamp(timestamp) {
        Some(date) => date.format("%b %-d, %Y, %I:%M %p").to_string(),
        None => timestamp.to_string(),
    }
}

/// Render a backend timestamp as relative time, e.g. `2 hours ago`.
pub fn time_ago(timestamp: &str) -> String {
    time_ago_from(timestamp, Utc::now())
}

/// Relative time against an explicit reference instant.
///
/// Timestamps in the future, under a minute old, or unparseable all render as
/// `just now`.
pub fn time_ago_from(timestamp: &str, now: DateTime<Utc>) -> String {
    let Some(date) = parse_timestamp(timestamp) else {
        return "just now".to_string();
    };

    let seconds = (now - date.with_timezone(&Utc)).num_seconds();
    for (unit, span) in INTERVALS {
        let count = seconds / span;
        if count >= 1 {
            return if count == 1 {
                format!("1 {unit} ago")
            } else {
                format!("{count} {unit}s ago")
            };
        }
    }

    "just now".to_string()
}

/// Parse the timestamp shapes the backend emits. Timestamps without an
/// explicit offset are taken as UTC.
fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc().fixed_offset());
    }
    if let Ok(day) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(day.and_hms_opt(0, 0, 0)?.and_utc().fixed_offset());
    }
    None
}
