//! Relative Time Formatting
//!
//! Coarse "time ago" labels for feed cards.

use chrono::{DateTime, Utc};

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 3_600_000;
const DAY_MS: i64 = 86_400_000;

/// Format the gap between `timestamp` and `now` as a coarse label.
///
/// Floor division on the millisecond difference; no localization and no
/// singular/plural handling ("1 min ago", "1h ago"). A future timestamp
/// gives a negative minute count and falls into the "Just now" bucket.
pub fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = (now - timestamp).num_milliseconds();
    let minutes = diff.div_euclid(MINUTE_MS);
    let hours = diff.div_euclid(HOUR_MS);
    let days = diff.div_euclid(DAY_MS);
    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else {
        format!("{}d ago", days)
    }
}

/// Label relative to the current instant, for rendering.
pub fn time_ago(timestamp: DateTime<Utc>) -> String {
    format_time_ago(timestamp, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_under_a_minute_is_just_now() {
        let ts = now() - Duration::seconds(30);
        assert_eq!(format_time_ago(ts, now()), "Just now");
    }

    #[test]
    fn test_minutes() {
        let ts = now() - Duration::minutes(5);
        assert_eq!(format_time_ago(ts, now()), "5 min ago");
    }

    #[test]
    fn test_hours() {
        let ts = now() - Duration::hours(3);
        assert_eq!(format_time_ago(ts, now()), "3h ago");
    }

    #[test]
    fn test_days() {
        let ts = now() - Duration::days(2);
        assert_eq!(format_time_ago(ts, now()), "2d ago");
    }

    #[test]
    fn test_future_timestamp_is_just_now() {
        assert_eq!(format_time_ago(now() + Duration::minutes(90), now()), "Just now");
        assert_eq!(format_time_ago(now() + Duration::days(2), now()), "Just now");
        // Floored, not truncated, so a partial negative minute stays below 1
        assert_eq!(format_time_ago(now() + Duration::seconds(30), now()), "Just now");
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(format_time_ago(now() - Duration::seconds(59), now()), "Just now");
        assert_eq!(format_time_ago(now() - Duration::seconds(60), now()), "1 min ago");
        assert_eq!(format_time_ago(now() - Duration::minutes(59), now()), "59 min ago");
        assert_eq!(format_time_ago(now() - Duration::minutes(60), now()), "1h ago");
        assert_eq!(format_time_ago(now() - Duration::hours(23), now()), "23h ago");
        assert_eq!(format_time_ago(now() - Duration::hours(24), now()), "1d ago");
    }
}
