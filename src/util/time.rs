//! Time and date helpers shared by the views and the in-memory backend.

use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};

/// Suspends the current task for `duration`.
///
/// Uses `gloo-timers` in the browser and `tokio::time` everywhere else.
pub async fn sleep(duration: Duration) {
    if duration.is_zero() {
        return;
    }

    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Formats how long ago `datetime` happened relative to `now`, e.g. `3 hours ago`.
pub fn format_relative_time(datetime: &DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(*datetime);

    let seconds = duration.num_seconds().max(0);
    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if seconds < 60 {
        "just now".to_string()
    } else if minutes < 60 {
        format!(
            "{} minute{} ago",
            minutes,
            if minutes == 1 { "" } else { "s" }
        )
    } else if hours < 24 {
        format!("{} hour{} ago", hours, if hours == 1 { "" } else { "s" })
    } else if days < 30 {
        format!("{} day{} ago", days, if days == 1 { "" } else { "s" })
    } else if days < 365 {
        let months = days / 30;
        format!("{} month{} ago", months, if months == 1 { "" } else { "s" })
    } else {
        let years = days / 365;
        format!("{} year{} ago", years, if years == 1 { "" } else { "s" })
    }
}

/// `2024-03-05` style date used in tables, CSV files and export names.
pub fn format_date(datetime: &DateTime<Utc>) -> String {
    datetime.format("%Y-%m-%d").to_string()
}

pub fn format_datetime(datetime: &DateTime<Utc>) -> String {
    datetime.format("%Y-%m-%d %H:%M").to_string()
}

/// Parses a `YYYY-MM-DD` form value.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration as ChronoDuration, TimeZone};

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn relative_time_picks_the_largest_unit() {
        let now = now();

        assert_eq!(format_relative_time(&now, now), "just now");
        assert_eq!(
            format_relative_time(&(now - ChronoDuration::minutes(1)), now),
            "1 minute ago"
        );
        assert_eq!(
            format_relative_time(&(now - ChronoDuration::hours(5)), now),
            "5 hours ago"
        );
        assert_eq!(
            format_relative_time(&(now - ChronoDuration::days(45)), now),
            "1 month ago"
        );
        assert_eq!(
            format_relative_time(&(now - ChronoDuration::days(800)), now),
            "2 years ago"
        );
    }

    #[test]
    fn future_timestamps_read_as_just_now() {
        let now = now();

        assert_eq!(
            format_relative_time(&(now + ChronoDuration::minutes(10)), now),
            "just now"
        );
    }

    #[test]
    fn dates_use_iso_format() {
        assert_eq!(format_date(&now()), "2024-06-15");
        assert_eq!(parse_date(" 2024-02-29 "), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(parse_date("15/06/2024"), None);
    }

    #[tokio::test]
    async fn zero_sleep_returns_immediately() {
        sleep(Duration::ZERO).await;
    }
}
