//! Human-readable durations for execution lists.

use chrono::Duration;

/// Render milliseconds as `42s`, `3m 5s` or `2h 10m`
pub fn format_duration_ms(ms: u64) -> String {
    let seconds = ms / 1000;
    if seconds < 60 {
        return format!("{}s", seconds);
    }

    let minutes = seconds / 60;
    let rem_seconds = seconds % 60;
    if minutes < 60 {
        return format!("{}m {}s", minutes, rem_seconds);
    }

    let hours = minutes / 60;
    let rem_minutes = minutes % 60;
    format!("{}h {}m", hours, rem_minutes)
}

/// Same as [`format_duration_ms`]; negative spans render as `0s`
pub fn format_duration(duration: Duration) -> String {
    let ms = duration.num_milliseconds().max(0) as u64;
    format_duration_ms(ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds() {
        assert_eq!(format_duration_ms(0), "0s");
        assert_eq!(format_duration_ms(999), "0s");
        assert_eq!(format_duration_ms(59_999), "59s");
    }

    #[test]
    fn test_minutes() {
        assert_eq!(format_duration_ms(60_000), "1m 0s");
        assert_eq!(format_duration_ms(8 * 60_000 + 5_000), "8m 5s");
    }

    #[test]
    fn test_hours() {
        assert_eq!(format_duration_ms(3_600_000), "1h 0m");
        assert_eq!(format_duration_ms(2 * 3_600_000 + 10 * 60_000 + 59_000), "2h 10m");
    }

    #[test]
    fn test_negative_duration() {
        assert_eq!(format_duration(Duration::seconds(-5)), "0s");
        assert_eq!(format_duration(Duration::minutes(45)), "45m 0s");
    }
}
