//! Human-readable "time ago" labels for feed timestamps.

use chrono::{DateTime, Utc};

/// Format how long ago `timestamp` was relative to `now`.
///
/// Under an hour: whole minutes ("42m ago"); under a day: whole hours
/// ("3h ago"); anything older shows the calendar date (`M/D/YYYY`). Elapsed
/// time floors rather than rounds, so exactly 60 minutes reads "1h ago" and
/// exactly 24 hours shows the date.
#[must_use]
pub fn format_recency(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed_ms = (now - timestamp).num_milliseconds();
    let minutes = elapsed_ms.div_euclid(60_000);
    let hours = elapsed_ms.div_euclid(3_600_000);

    if minutes < 60 {
        format!("{minutes}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else {
        timestamp.format("%-m/%-d/%Y").to_string()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    // --- Minute / hour labels ---

    #[test]
    fn test_minutes_label() {
        assert_eq!(format_recency(now() - Duration::minutes(5), now()), "5m ago");
        assert_eq!(format_recency(now(), now()), "0m ago");
    }

    #[test]
    fn test_hours_label() {
        assert_eq!(format_recency(now() - Duration::hours(3), now()), "3h ago");
        assert_eq!(format_recency(now() - Duration::minutes(90), now()), "1h ago");
    }

    // --- Floor boundaries ---

    #[test]
    fn test_exactly_sixty_minutes_is_one_hour() {
        assert_eq!(format_recency(now() - Duration::minutes(60), now()), "1h ago");
    }

    #[test]
    fn test_just_under_sixty_minutes_stays_in_minutes() {
        let ts = now() - Duration::minutes(60) + Duration::seconds(1);
        assert_eq!(format_recency(ts, now()), "59m ago");
    }

    #[test]
    fn test_exactly_twenty_four_hours_is_a_date() {
        assert_eq!(format_recency(now() - Duration::hours(24), now()), "2/28/2025");
    }

    #[test]
    fn test_just_under_twenty_four_hours_stays_in_hours() {
        let ts = now() - Duration::hours(24) + Duration::seconds(1);
        assert_eq!(format_recency(ts, now()), "23h ago");
    }

    // --- Date formatting ---

    #[test]
    fn test_old_timestamps_show_unpadded_date() {
        let ts = Utc.with_ymd_and_hms(2024, 11, 5, 9, 0, 0).unwrap();
        assert_eq!(format_recency(ts, now()), "11/5/2024");
    }
}
