use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Serialize;
use tetonor_core::{Difficulty, Dimensions, PuzzleState};
use tetonor_generator::{BlankLayout, build_puzzle, into_sorted_pairs};
use tetonor_random::{Mulberry32, RandomSource, date, hash_string, seeded_random_int};

use crate::{daily_challenge_difficulty, daily_challenge_number};

const SEED_PREFIX: &str = "tetonor-daily-";
const PAIR_COUNT: usize = 8;
const BLANK_SLOTS: std::ops::RangeInclusive<usize> = 7..=8;

/// A daily puzzle with its calendar metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPuzzle {
    /// Challenge date, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// 1-based puzzle number.
    pub number: i64,
    /// Weekday difficulty.
    pub difficulty: Difficulty,
    /// The puzzle.
    pub puzzle: PuzzleState,
}

impl DailyPuzzle {
    /// Derives the daily puzzle of `date`.
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date,
            number: daily_challenge_number(date),
            difficulty: daily_challenge_difficulty(date),
            puzzle: generate_daily_puzzle(date),
        }
    }
}

/// Returns the seed of the daily puzzle of `date`.
#[must_use]
pub fn daily_seed(date: NaiveDate) -> u32 {
    hash_string(&format!("{SEED_PREFIX}{}", date::format_date_string(date)))
}

/// Derives the 4x4 daily puzzle of `date`.
///
/// Every caller gets the same puzzle for the same date: all randomness comes
/// from a [`Mulberry32`] seeded by [`daily_seed`]. Pairs use small numbers
/// (first 1-9, second above it up to 10) and 7 or 8 slots are hidden.
///
/// Only the pair draws follow the shared `tetonor-daily-` seed stream used by
/// other Tetonor clients. The grid order, the sorted strip and the hidden
/// slots are this crate's own, so a daily puzzle here is not identical to the
/// web client's puzzle for the same date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tetonor_daily::generate_daily_puzzle;
///
/// let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// assert_eq!(generate_daily_puzzle(day), generate_daily_puzzle(day));
/// ```
#[must_use]
pub fn generate_daily_puzzle(date: NaiveDate) -> PuzzleState {
    let mut rng = Mulberry32::new(daily_seed(date));
    let pairs = into_sorted_pairs(draw_daily_pairs(&mut rng));
    log::debug!(
        "deriving daily puzzle #{} for {date}",
        daily_challenge_number(date)
    );
    match build_puzzle(
        pairs,
        Dimensions::new(4, 4),
        &BLANK_SLOTS,
        BlankLayout::Scattered,
        &mut rng,
    ) {
        Ok(puzzle) => puzzle,
        Err(err) => unreachable!("daily puzzle parameters are fixed: {err}"),
    }
}

/// Returns today's daily puzzle.
#[must_use]
pub fn todays_daily_puzzle() -> DailyPuzzle {
    DailyPuzzle::for_date(date::today())
}

/// Returns the daily puzzle of `days` days ago.
#[must_use]
pub fn daily_puzzle_from_days_ago(days: u64) -> DailyPuzzle {
    DailyPuzzle::for_date(date::days_before(date::today(), days))
}

fn draw_daily_pairs<R>(rng: &mut R) -> Vec<(u32, u32)>
where
    R: RandomSource + ?Sized,
{
    let mut pairs = Vec::with_capacity(PAIR_COUNT);
    let mut used = HashSet::with_capacity(PAIR_COUNT);
    while pairs.len() < PAIR_COUNT {
        let first = seeded_random_int(1, 9, rng);
        let second = seeded_random_int(first + 1, 10, rng);
        if used.insert((first, second)) {
            pairs.push((first, second));
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use tetonor_validator::validate_puzzle;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_same_date_same_puzzle() {
        let day = ymd(2025, 1, 1);
        let a = generate_daily_puzzle(day);
        let b = generate_daily_puzzle(day);
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
        assert_ne!(a, generate_daily_puzzle(ymd(2025, 1, 2)));
    }

    #[test]
    fn test_seed_uses_date_string() {
        assert_eq!(
            daily_seed(ymd(2025, 1, 1)),
            hash_string("tetonor-daily-2025-01-01")
        );
    }

    #[test]
    fn test_daily_bundle() {
        let daily = DailyPuzzle::for_date(ymd(2024, 12, 25));
        assert_eq!(daily.number, 2);
        assert_eq!(daily.difficulty, Difficulty::Moderate);
        assert_eq!(daily.puzzle, generate_daily_puzzle(ymd(2024, 12, 25)));
        assert_eq!(daily_puzzle_from_days_ago(0), todays_daily_puzzle());
    }

    #[test]
    fn test_daily_layout_is_local() {
        for day in [ymd(2025, 1, 1), ymd(2025, 1, 6)] {
            let puzzle = generate_daily_puzzle(day);
            assert!((7..=8).contains(&puzzle.hidden_slot_count()), "{day}");
            assert!(
                puzzle
                    .strip
                    .windows(2)
                    .all(|w| w[0].cmp_by_true_values(&w[1]).is_le()),
                "{day}"
            );
        }
    }

    proptest! {
        #[test]
        fn test_daily_puzzle_shape(days in 0_u64..2000) {
            let day = date::days_after(date::launch_date(), days);
            let mut puzzle = generate_daily_puzzle(day);
            prop_assert_eq!(puzzle.check_consistency(), Ok(()));
            prop_assert_eq!(puzzle.grid.len(), 16);
            prop_assert!((7..=8).contains(&puzzle.hidden_slot_count()));
            for pair in &puzzle.strip {
                let (first, second) = pair.true_values().unwrap();
                prop_assert!((1..=9).contains(&first));
                prop_assert!(first < second && second <= 10);
            }
            puzzle.fill_with_solution().unwrap();
            prop_assert!(validate_puzzle(&puzzle).is_correct);
        }
    }
}
