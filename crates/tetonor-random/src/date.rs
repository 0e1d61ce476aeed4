//! Calendar helpers in whole days.
//!
//! Dates travel as `YYYY-MM-DD` strings at the edges and as
//! [`NaiveDate`] inside. "Today" is the current UTC date.

use chrono::{Days, NaiveDate, Utc};

/// The date of the first daily challenge, as `YYYY-MM-DD`.
pub const LAUNCH_DATE: &str = "2024-12-24";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Error returned for a malformed `YYYY-MM-DD` string.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid date `{input}` (expected YYYY-MM-DD)")]
pub struct DateParseError {
    input: String,
}

/// Parses a `YYYY-MM-DD` string.
///
/// # Errors
///
/// Returns [`DateParseError`] if `s` is not a valid calendar date in that form.
///
/// # Examples
///
/// ```
/// use tetonor_random::date;
///
/// let day = date::parse_date_string("2025-01-06")?;
/// assert_eq!(date::format_date_string(day), "2025-01-06");
/// assert!(date::parse_date_string("2025-02-30").is_err());
/// # Ok::<(), tetonor_random::DateParseError>(())
/// ```
pub fn parse_date_string(s: &str) -> Result<NaiveDate, DateParseError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| DateParseError {
        input: s.to_owned(),
    })
}

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date_string(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Returns the launch date.
#[must_use]
pub fn launch_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 24).unwrap_or(NaiveDate::MIN)
}

/// Returns the current UTC date.
#[must_use]
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Returns the current UTC date as `YYYY-MM-DD`.
#[must_use]
pub fn today_date_string() -> String {
    format_date_string(today())
}

/// Returns the date `days` days before `date`.
#[must_use]
pub fn days_before(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days))
        .unwrap_or(NaiveDate::MIN)
}

/// Returns the date `days` days after `date`.
#[must_use]
pub fn days_after(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX)
}

/// Returns the `YYYY-MM-DD` string of the UTC date `days` days ago.
#[must_use]
pub fn date_string_days_ago(days: u64) -> String {
    format_date_string(days_before(today(), days))
}

/// Returns the signed number of whole days from `launch` to `date`.
///
/// # Examples
///
/// ```
/// use tetonor_random::date;
///
/// let launch = date::launch_date();
/// assert_eq!(date::days_since_launch(launch, launch), 0);
/// assert_eq!(date::days_since_launch(date::days_after(launch, 1), launch), 1);
/// assert_eq!(date::days_since_launch(date::days_before(launch, 3), launch), -3);
/// ```
#[must_use]
pub fn days_since_launch(date: NaiveDate, launch: NaiveDate) -> i64 {
    date.signed_duration_since(launch).num_days()
}
