//! Puzzle numbering, weekday difficulty and archive listings.

use chrono::{Datelike as _, NaiveDate, Weekday};
use serde::Serialize;
use tetonor_core::Difficulty;
use tetonor_random::date;

use crate::CompletionStore;

/// Number of days shown by [`daily_challenge_list`], today included.
pub const RECENT_CHALLENGE_DAYS: u64 = 7;

/// Returns the difficulty of the challenge of `date`.
///
/// Monday and Tuesday are easy, Wednesday and Thursday moderate, and Friday
/// through Sunday difficult.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tetonor_core::Difficulty;
/// use tetonor_daily::daily_challenge_difficulty;
///
/// let monday = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
/// assert_eq!(daily_challenge_difficulty(monday), Difficulty::Easy);
/// ```
#[must_use]
pub fn daily_challenge_difficulty(date: NaiveDate) -> Difficulty {
    match date.weekday() {
        Weekday::Mon | Weekday::Tue => Difficulty::Easy,
        Weekday::Wed | Weekday::Thu => Difficulty::Moderate,
        Weekday::Fri | Weekday::Sat | Weekday::Sun => Difficulty::Difficult,
    }
}

/// Returns the 1-based puzzle number of `date`; the launch date is #1.
///
/// Dates before launch yield zero or negative numbers.
#[must_use]
pub fn daily_challenge_number(date: NaiveDate) -> i64 {
    date::days_since_launch(date, date::launch_date()) + 1
}

/// Returns the date of puzzle number `number`.
#[must_use]
pub fn date_from_puzzle_number(number: i64) -> NaiveDate {
    let offset = number - 1;
    let launch = date::launch_date();
    match u64::try_from(offset) {
        Ok(days) => date::days_after(launch, days),
        Err(_) => date::days_before(launch, offset.unsigned_abs()),
    }
}

/// Returns `true` if `date` lies between launch and `today`, both included.
#[must_use]
pub fn is_valid_daily_date(date: NaiveDate, today: NaiveDate) -> bool {
    let days = date::days_since_launch(date, date::launch_date());
    let days_until_today = date::days_since_launch(today, date::launch_date());
    (0..=days_until_today).contains(&days)
}

/// Summary of one daily challenge for archive views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyChallengeInfo {
    /// Challenge date, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Human-readable date, e.g. `Mon, Jan 6`.
    pub display_date: String,
    /// Whether the completion store has this date.
    pub is_completed: bool,
    /// Whether `date` is the reference "today".
    pub is_today: bool,
    /// 1-based puzzle number.
    pub puzzle_number: i64,
    /// Weekday difficulty.
    pub difficulty: Difficulty,
}

impl DailyChallengeInfo {
    fn new<S>(date: NaiveDate, today: NaiveDate, display_format: &str, store: &S) -> Self
    where
        S: CompletionStore + ?Sized,
    {
        Self {
            date,
            display_date: date.format(display_format).to_string(),
            is_completed: store.is_completed(date),
            is_today: date == today,
            puzzle_number: daily_challenge_number(date),
            difficulty: daily_challenge_difficulty(date),
        }
    }
}

/// Lists today's challenge and the six before it, newest first.
///
/// Days before launch are left out.
pub fn daily_challenge_list<S>(today: NaiveDate, store: &S) -> Vec<DailyChallengeInfo>
where
    S: CompletionStore + ?Sized,
{
    (0..RECENT_CHALLENGE_DAYS)
        .map(|days| date::days_before(today, days))
        .filter(|&day| daily_challenge_number(day) >= 1)
        .map(|day| DailyChallengeInfo::new(day, today, "%a, %b %-d", store))
        .collect()
}

/// Lists every challenge from `today` back to launch, newest first.
pub fn all_daily_challenges<S>(today: NaiveDate, store: &S) -> Vec<DailyChallengeInfo>
where
    S: CompletionStore + ?Sized,
{
    let total = u64::try_from(daily_challenge_number(today)).unwrap_or(0);
    (0..total)
        .map(|days| date::days_before(today, days))
        .map(|day| DailyChallengeInfo::new(day, today, "%a, %b %-d, %Y", store))
        .collect()
}
