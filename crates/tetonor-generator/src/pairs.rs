//! Drawing the number pairs behind a puzzle.
//!
//! Two strategies are available and composed by [`draw_pairs`]:
//!
//! - [`PairStrategy::Unconstrained`] only rejects exact duplicate pairs.
//! - [`PairStrategy::CollisionBudget`] additionally keeps the displayed targets
//!   mostly distinct. When it cannot finish within its attempt budget it falls
//!   back to the unconstrained strategy, so callers always receive pairs.

use std::{collections::HashSet, ops::RangeInclusive};

use tetonor_core::{NumberPair, PairId};
use tetonor_random::{RandomSource, seeded_random_int};

/// Draws per requested pair before the unconstrained strategy accepts duplicates.
const UNCONSTRAINED_DRAWS_PER_PAIR: usize = 1_000;

/// Limits for [`PairStrategy::CollisionBudget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionBudget {
    /// Maximum number of target collisions tolerated across the whole set.
    pub max_collisions: usize,
    /// Number of fresh attempts before falling back.
    pub max_attempts: usize,
    /// Number of draws per attempt.
    pub max_draws: usize,
}

impl Default for CollisionBudget {
    fn default() -> Self {
        Self {
            max_collisions: 2,
            max_attempts: 100,
            max_draws: 500,
        }
    }
}

/// How candidate pairs are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairStrategy {
    /// Reject exact duplicates only.
    Unconstrained,
    /// Reject duplicates and keep target collisions within a budget.
    CollisionBudget(CollisionBudget),
}

/// The collision-budgeted strategy ran out of attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("collision budget not met after {attempts} attempts")]
struct BudgetExhausted {
    attempts: usize,
}

/// Draws two values from `range` and returns them in ascending order.
pub fn draw_canonical_pair<R>(range: &RangeInclusive<u32>, rng: &mut R) -> (u32, u32)
where
    R: RandomSource + ?Sized,
{
    let a = seeded_random_int(*range.start(), *range.end(), rng);
    let b = seeded_random_int(*range.start(), *range.end(), rng);
    if a <= b { (a, b) } else { (b, a) }
}

/// Counts how many target collisions adding `(first, second)` would cause.
///
/// A collision is the pair's sum or product already being a target, or the
/// pair's own sum equalling its own product.
#[must_use]
pub fn count_target_collisions(first: u32, second: u32, used_targets: &HashSet<u32>) -> usize {
    let sum = first.saturating_add(second);
    let product = first.saturating_mul(second);
    usize::from(used_targets.contains(&sum))
        + usize::from(used_targets.contains(&product))
        + usize::from(sum == product)
}

/// Draws `count` canonical pairs from `range` with the given strategy.
///
/// The result is in draw order.
///
/// # Panics
///
/// Panics if `range` is empty.
pub fn draw_pairs<R>(
    count: usize,
    range: &RangeInclusive<u32>,
    strategy: PairStrategy,
    rng: &mut R,
) -> Vec<(u32, u32)>
where
    R: RandomSource + ?Sized,
{
    match strategy {
        PairStrategy::Unconstrained => draw_unconstrained(count, range, rng),
        PairStrategy::CollisionBudget(budget) => draw_within_budget(count, range, budget, rng)
            .unwrap_or_else(|err| {
                log::debug!("{err}; falling back to unconstrained pairs");
                draw_unconstrained(count, range, rng)
            }),
    }
}

/// Generates `count` unique pairs from `min_value..=max_value`, sorted ascending.
///
/// Pair ids are assigned `1..=count` in sorted order. If the range cannot
/// supply `count` unique pairs, duplicates are accepted after a bounded
/// number of draws.
///
/// # Panics
///
/// Panics if `min_value > max_value`.
///
/// # Examples
///
/// ```
/// use tetonor_generator::generate_number_pairs;
/// use tetonor_random::Mulberry32;
///
/// let pairs = generate_number_pairs(8, 1, 50, &mut Mulberry32::new(7));
/// assert_eq!(pairs.len(), 8);
/// assert!(pairs.windows(2).all(|w| w[0].cmp_by_true_values(&w[1]).is_le()));
/// ```
pub fn generate_number_pairs<R>(
    count: usize,
    min_value: u32,
    max_value: u32,
    rng: &mut R,
) -> Vec<NumberPair>
where
    R: RandomSource + ?Sized,
{
    let pairs = draw_pairs(
        count,
        &(min_value..=max_value),
        PairStrategy::Unconstrained,
        rng,
    );
    into_sorted_pairs(pairs)
}

/// Sorts canonical pairs ascending and assigns ids `1..`.
#[must_use]
pub fn into_sorted_pairs(mut values: Vec<(u32, u32)>) -> Vec<NumberPair> {
    values.sort_unstable();
    (1..)
        .zip(values)
        .map(|(id, (a, b))| NumberPair::new(PairId::new(id), a, b))
        .collect()
}

fn draw_unconstrained<R>(count: usize, range: &RangeInclusive<u32>, rng: &mut R) -> Vec<(u32, u32)>
where
    R: RandomSource + ?Sized,
{
    let mut pairs = Vec::with_capacity(count);
    let mut used = HashSet::with_capacity(count);
    let mut draws = 0;
    let draw_limit = count.saturating_mul(UNCONSTRAINED_DRAWS_PER_PAIR);
    while pairs.len() < count {
        let pair = draw_canonical_pair(range, rng);
        draws += 1;
        if used.insert(pair) {
            pairs.push(pair);
        } else if draws >= draw_limit {
            log::debug!(
                "value range {range:?} cannot supply {count} unique pairs; accepting duplicate {pair:?}"
            );
            pairs.push(pair);
        }
    }
    pairs
}

fn draw_within_budget<R>(
    count: usize,
    range: &RangeInclusive<u32>,
    budget: CollisionBudget,
    rng: &mut R,
) -> Result<Vec<(u32, u32)>, BudgetExhausted>
where
    R: RandomSource + ?Sized,
{
    for _ in 0..budget.max_attempts {
        let mut pairs = Vec::with_capacity(count);
        let mut used_pairs = HashSet::with_capacity(count);
        let mut used_targets = HashSet::with_capacity(count * 2);
        let mut total_collisions = 0;

        for _ in 0..budget.max_draws {
            if pairs.len() == count {
                break;
            }
            let (first, second) = draw_canonical_pair(range, rng);
            let collisions = count_target_collisions(first, second, &used_targets);
            if used_pairs.contains(&(first, second))
                || total_collisions + collisions > budget.max_collisions
            {
                continue;
            }
            used_pairs.insert((first, second));
            used_targets.insert(first.saturating_add(second));
            used_targets.insert(first.saturating_mul(second));
            total_collisions += collisions;
            pairs.push((first, second));
        }

        if pairs.len() == count {
            return Ok(pairs);
        }
    }
    Err(BudgetExhausted {
        attempts: budget.max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use tetonor_random::Mulberry32;

    use super::*;

    fn total_collisions(pairs: &[(u32, u32)]) -> usize {
        let mut used = HashSet::new();
        let mut total = 0;
        for &(a, b) in pairs {
            total += count_target_collisions(a, b, &used);
            used.insert(a + b);
            used.insert(a * b);
        }
        total
    }

    #[test]
    fn test_count_target_collisions() {
        let used = HashSet::from([10, 21]);
        assert_eq!(count_target_collisions(3, 7, &used), 2);
        assert_eq!(count_target_collisions(1, 9, &used), 1);
        assert_eq!(count_target_collisions(2, 2, &HashSet::new()), 1);
        assert_eq!(count_target_collisions(4, 6, &used), 0);
    }

    #[test]
    fn test_unconstrained_pairs_are_unique_and_in_range() {
        let mut rng = Mulberry32::new(11);
        let pairs = draw_pairs(20, &(1..=50), PairStrategy::Unconstrained, &mut rng);
        assert_eq!(pairs.len(), 20);
        let unique = pairs.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), 20);
        assert!(
            pairs
                .iter()
                .all(|&(a, b)| a <= b && (1..=50).contains(&a) && (1..=50).contains(&b))
        );
    }

    #[test]
    fn test_tiny_range_accepts_duplicates() {
        // {1..=2} has only three canonical pairs: (1,1), (1,2), (2,2).
        let mut rng = Mulberry32::new(5);
        let pairs = draw_pairs(5, &(1..=2), PairStrategy::Unconstrained, &mut rng);
        assert_eq!(pairs.len(), 5);
        assert_eq!(pairs.iter().collect::<HashSet<_>>().len(), 3);
    }

    #[test]
    fn test_budget_keeps_collisions_low() {
        let mut rng = Mulberry32::new(2024);
        let budget = CollisionBudget::default();
        let pairs = draw_within_budget(8, &(1..=50), budget, &mut rng).unwrap();
        assert_eq!(pairs.len(), 8);
        assert!(total_collisions(&pairs) <= budget.max_collisions);
    }

    #[test]
    fn test_exhausted_budget_falls_back() {
        // Every pair from {1..=2} collides: (2,2) has sum == product and the
        // others share targets, so a zero budget cannot be met for 3 pairs.
        let budget = CollisionBudget {
            max_collisions: 0,
            max_attempts: 3,
            max_draws: 20,
        };
        let mut rng = Mulberry32::new(1);
        assert_eq!(
            draw_within_budget(3, &(1..=2), budget, &mut rng),
            Err(BudgetExhausted { attempts: 3 })
        );
        let pairs = draw_pairs(3, &(1..=2), PairStrategy::CollisionBudget(budget), &mut rng);
        assert_eq!(pairs.len(), 3);
    }

    #[test]
    fn test_generate_number_pairs_sorted_with_ids() {
        let pairs = generate_number_pairs(8, 2, 9, &mut Mulberry32::new(3));
        let ids = pairs.iter().map(|p| p.id.value()).collect::<Vec<_>>();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
        for w in pairs.windows(2) {
            assert!(w[0].visible_values() < w[1].visible_values());
        }
    }
}
