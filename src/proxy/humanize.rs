//! Natural-language rendering of elapsed seconds.
//!
//! Minutes are the floor unit: seconds never appear in the output, a
//! sub-minute remainder becomes a fractional minute ("1.5 minutes").

const SECS_PER_MINUTE: f64 = 60.0;
const SECS_PER_HOUR: u64 = 3_600;
const SECS_PER_DAY: u64 = 86_400;

/// Phrasing for a duration that rounds down to nothing
const ZERO_DURATION: &str = "a moment";

/// Renders a duration in seconds as natural language at minute granularity.
///
/// # Arguments
/// * `seconds` - Elapsed seconds, integer or fractional
///
/// # Returns
/// * A phrase like "1.5 minutes", "2 hours and 10 minutes" or "a moment"
pub fn humanize_minutes(seconds: f64) -> String {
    if seconds.is_nan() || seconds <= 0.0 {
        return ZERO_DURATION.to_string();
    }

    let days = (seconds / SECS_PER_DAY as f64).floor() as u64;
    let rem = seconds - (days * SECS_PER_DAY) as f64;
    let hours = (rem / SECS_PER_HOUR as f64).floor() as u64;
    let rem = rem - (hours * SECS_PER_HOUR) as f64;
    // Round to two decimals up front so "59.9999" doesn't print as-is
    let minutes = (rem / SECS_PER_MINUTE * 100.0).round() / 100.0;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(count_unit(days, "day"));
    }
    if hours > 0 {
        parts.push(count_unit(hours, "hour"));
    }
    if minutes > 0.0 {
        parts.push(minutes_part(minutes));
    }

    if parts.is_empty() {
        return ZERO_DURATION.to_string();
    }
    join_parts(&parts)
}

fn count_unit(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

fn minutes_part(minutes: f64) -> String {
    let text = format!("{:.2}", minutes);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "1" {
        "1 minute".to_string()
    } else {
        format!("{} minutes", text)
    }
}

fn join_parts(parts: &[String]) -> String {
    match parts {
        [only] => only.clone(),
        [first, second] => format!("{} and {}", first, second),
        [head @ .., last] => format!("{} and {}", head.join(", "), last),
        [] => ZERO_DURATION.to_string(),
    }
}
