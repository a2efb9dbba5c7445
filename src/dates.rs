//! Date arithmetic and formatting on top of `chrono`.
//!
//! Functions that depend on "now" take it as a parameter ([`time_ago`]) or
//! read it from a [`Clock`] ([`time_ago_since`]), so they stay testable.
//!
//! ## Examples
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use utilkit::{format_date, get_time_diff, time_ago, TimeDiff};
//!
//! let posted = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
//! let now = Utc.with_ymd_and_hms(2024, 3, 4, 10, 30, 15).unwrap();
//!
//! assert_eq!(time_ago(posted, now), "3 days ago");
//! assert_eq!(
//!     get_time_diff(posted, now),
//!     TimeDiff { days: 3, hours: 1, mins: 30, secs: 15 }
//! );
//! assert_eq!(format_date(&posted, "DD/MM/YYYY"), "01/03/2024");
//! ```

use crate::clock::Clock;
use crate::error::{Error, Result};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

const DAYS_PER_MONTH: f64 = 30.44;

const NAIVE_DATE_TIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

fn plural(count: i64, unit: &str) -> String {
    if count > 1 {
        format!("{count} {unit}s ago")
    } else {
        format!("{count} {unit} ago")
    }
}

/// Describes how long before `now` the moment `past` was, using the largest
/// whole unit: years, months, days, hours, or minutes.
///
/// Anything under a minute, and any `past` later than `now`, reads
/// `just now`. A month counts as 30.44 days and a year as twelve months.
///
/// ```rust
/// use chrono::{Duration, Utc};
/// use utilkit::time_ago;
///
/// let now = Utc::now();
/// assert_eq!(time_ago(now - Duration::seconds(59), now), "just now");
/// assert_eq!(time_ago(now - Duration::minutes(1), now), "1 minute ago");
/// assert_eq!(time_ago(now - Duration::hours(5), now), "5 hours ago");
/// ```
#[must_use]
pub fn time_ago(past: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - past).num_seconds();
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;
    let months = (days as f64 / DAYS_PER_MONTH).floor() as i64;
    let years = months / 12;

    if years > 0 {
        plural(years, "year")
    } else if months > 0 {
        plural(months, "month")
    } else if days > 0 {
        plural(days, "day")
    } else if hours > 0 {
        plural(hours, "hour")
    } else if minutes > 0 {
        plural(minutes, "minute")
    } else {
        "just now".to_string()
    }
}

/// [`time_ago`] relative to the current time of `clock`.
pub fn time_ago_since<C: Clock + ?Sized>(past: DateTime<Utc>, clock: &C) -> String {
    time_ago(past, clock.now_utc())
}

/// The absolute distance between two moments, split into whole units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TimeDiff {
    pub days: u64,
    pub hours: u64,
    pub mins: u64,
    pub secs: u64,
}

impl TimeDiff {
    /// The whole difference in seconds.
    #[must_use]
    pub const fn total_secs(&self) -> u64 {
        self.days * 86_400 + self.hours * 3_600 + self.mins * 60 + self.secs
    }
}

impl fmt::Display for TimeDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d {}h {}m {}s", self.days, self.hours, self.mins, self.secs)
    }
}

/// Splits the distance between `start` and `end` into days, hours, minutes,
/// and seconds. Order does not matter; sub-second remainders are dropped.
#[must_use]
pub fn get_time_diff(start: DateTime<Utc>, end: DateTime<Utc>) -> TimeDiff {
    let total = (end - start).num_milliseconds().unsigned_abs() / 1000;
    TimeDiff {
        days: total / 86_400,
        hours: (total % 86_400) / 3_600,
        mins: (total % 3_600) / 60,
        secs: total % 60,
    }
}

/// Fills the first `YYYY`, `MM`, and `DD` in `format` with the year,
/// zero-padded month, and zero-padded day of `date`.
///
/// Other text passes through unchanged.
///
/// ```rust
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
/// assert_eq!(utilkit::format_date(&date, "YYYY-MM-DD"), "2024-07-04");
/// assert_eq!(utilkit::format_date(&date, "Due: MM.DD"), "Due: 07.04");
/// ```
#[must_use]
pub fn format_date<D: Datelike>(date: &D, format: &str) -> String {
    format
        .replacen("YYYY", &date.year().to_string(), 1)
        .replacen("MM", &format!("{:02}", date.month()), 1)
        .replacen("DD", &format!("{:02}", date.day()), 1)
}

/// Gregorian leap year rule.
///
/// ```rust
/// assert!(utilkit::is_leap_year(2024));
/// assert!(utilkit::is_leap_year(2000));
/// assert!(!utilkit::is_leap_year(1900));
/// assert!(!utilkit::is_leap_year(2023));
/// ```
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Parses an RFC 3339 timestamp, a date-time without offset (taken as UTC),
/// or a plain `YYYY-MM-DD` date (midnight UTC).
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] when none of those forms match.
///
/// ```rust
/// use utilkit::parse_date;
///
/// let a = parse_date("2024-01-15T10:30:00+02:00")?;
/// let b = parse_date("2024-01-15 08:30:00")?;
/// assert_eq!(a, b);
/// assert!(parse_date("15/01/2024").is_err());
/// # Ok::<(), utilkit::Error>(())
/// ```
pub fn parse_date(s: &str) -> Result<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(s) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| Error::invalid_date(s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::Duration;
    use std::time::Duration as StdDuration;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn test_time_ago_units() {
        let now = at(2024, 6, 1, 12, 0, 0);
        assert_eq!(time_ago(now - Duration::days(1), now), "1 day ago");
        assert_eq!(time_ago(now - Duration::days(29), now), "29 days ago");
        assert_eq!(time_ago(now - Duration::days(31), now), "1 month ago");
        assert_eq!(time_ago(now - Duration::days(400), now), "1 year ago");
        assert_eq!(time_ago(now - Duration::days(800), now), "2 years ago");
        assert_eq!(time_ago(now - Duration::minutes(59), now), "59 minutes ago");
    }

    #[test]
    fn test_time_ago_future_is_just_now() {
        let now = at(2024, 6, 1, 12, 0, 0);
        assert_eq!(time_ago(now + Duration::days(3), now), "just now");
    }

    #[test]
    fn test_time_ago_since_clock() {
        let clock = ManualClock::starting_at(at(2024, 1, 1, 0, 0, 0));
        let posted = clock.now_utc();
        clock.advance(StdDuration::from_secs(2 * 3600 + 5));
        assert_eq!(time_ago_since(posted, &clock), "2 hours ago");
    }

    #[test]
    fn test_time_diff_is_symmetric() {
        let a = at(2024, 1, 1, 0, 0, 0);
        let b = at(2024, 1, 2, 1, 1, 1);
        let expected = TimeDiff { days: 1, hours: 1, mins: 1, secs: 1 };
        assert_eq!(get_time_diff(a, b), expected);
        assert_eq!(get_time_diff(b, a), expected);
        assert_eq!(expected.total_secs(), 90_061);
        assert_eq!(expected.to_string(), "1d 1h 1m 1s");
    }

    #[test]
    fn test_time_diff_drops_millis() {
        let a = at(2024, 1, 1, 0, 0, 0);
        let b = a + Duration::milliseconds(1_999);
        assert_eq!(get_time_diff(a, b).secs, 1);
    }

    #[test]
    fn test_format_date_first_occurrence_only() {
        let date = NaiveDate::from_ymd_opt(987, 12, 1).unwrap();
        assert_eq!(format_date(&date, "YYYY YYYY"), "987 YYYY");
        assert_eq!(format_date(&date, "no tokens"), "no tokens");
    }

    #[test]
    fn test_parse_date_forms() {
        assert_eq!(parse_date("2024-02-29").unwrap(), at(2024, 2, 29, 0, 0, 0));
        assert_eq!(parse_date("2024-02-29T13:45").unwrap(), at(2024, 2, 29, 13, 45, 0));
        assert_eq!(parse_date(" 2024-02-29T13:45:10Z ").unwrap(), at(2024, 2, 29, 13, 45, 10));
        assert!(matches!(parse_date("2023-02-29"), Err(Error::InvalidDate(_))));
    }
}
