//! Daily Tetonor challenges.
//!
//! Every calendar date maps to one puzzle that is identical for all players:
//! the puzzle is derived from a [`Mulberry32`](tetonor_random::Mulberry32)
//! generator seeded with a hash of the date. Dates are numbered from the
//! launch date (puzzle #1), and the weekday decides the difficulty label.
//!
//! Completion tracking is delegated to a [`CompletionStore`];
//! [`MemoryCompletionStore`] keeps the most recent completions in memory.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use tetonor_daily::{DailyPuzzle, MemoryCompletionStore, daily_challenge_list};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
//! let daily = DailyPuzzle::for_date(today);
//! assert_eq!(daily.number, 14);
//!
//! let list = daily_challenge_list(today, &MemoryCompletionStore::new());
//! assert_eq!(list.len(), 7);
//! assert!(list[0].is_today);
//! ```

pub use self::{
    calendar::{
        DailyChallengeInfo, RECENT_CHALLENGE_DAYS, all_daily_challenges, daily_challenge_difficulty,
        daily_challenge_list, daily_challenge_number, date_from_puzzle_number, is_valid_daily_date,
    },
    puzzle::{
        DailyPuzzle, daily_puzzle_from_days_ago, daily_seed, generate_daily_puzzle,
        todays_daily_puzzle,
    },
    store::{
        COMPLETION_HISTORY_LEN, CompletionStore, MemoryCompletionStore, is_todays_daily_completed,
        record_todays_daily_completion,
    },
};

mod calendar;
mod puzzle;
mod store;
