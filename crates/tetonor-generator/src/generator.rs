use std::ops::RangeInclusive;

use tetonor_core::{Dimensions, PuzzleConfig, PuzzleState};
use tetonor_random::RandomSource;

use crate::{
    BlankLayout, GeneratorError, PairStrategy, PuzzleSeed, Tier, TierProfile, build_puzzle,
    check_dimensions, draw_pairs, grid::pair_capacity, into_sorted_pairs,
};

/// A generated puzzle together with the seed that reproduces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle, with every player field empty.
    pub puzzle: PuzzleState,
    /// Seed that regenerates `puzzle` with the same generator settings.
    pub seed: PuzzleSeed,
}

/// Free-play puzzle generator.
///
/// Holds validated settings, so generation itself cannot fail.
///
/// # Examples
///
/// ```
/// use tetonor_core::PuzzleConfig;
/// use tetonor_generator::PuzzleGenerator;
///
/// let generator = PuzzleGenerator::new(&PuzzleConfig::default())?;
/// let generated = generator.generate();
/// let again = generator.generate_with_seed(generated.seed);
/// assert_eq!(generated, again);
/// # Ok::<(), tetonor_generator::GeneratorError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleGenerator {
    dimensions: Dimensions,
    values: RangeInclusive<u32>,
    blank_slots: RangeInclusive<usize>,
    strategy: PairStrategy,
    layout: BlankLayout,
}

impl PuzzleGenerator {
    /// Creates a generator from a free-play configuration.
    ///
    /// Pairs are drawn without a collision budget and blanks follow the
    /// layout of the configured difficulty.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is empty or has an odd number of cells,
    /// or if the value range is empty or too large for its targets.
    pub fn new(config: &PuzzleConfig) -> Result<Self, GeneratorError> {
        let dimensions = check_dimensions(config.rows, config.cols)?;
        let values = check_value_range(config.min_value, config.max_value)?;
        Ok(Self {
            dimensions,
            values,
            blank_slots: config.blank_pairs..=config.blank_pairs,
            strategy: PairStrategy::Unconstrained,
            layout: config.difficulty.into(),
        })
    }

    /// Creates the generator of a difficulty tier.
    #[must_use]
    pub fn for_tier(tier: Tier) -> Self {
        let profile = tier.profile();
        let strategy = profile.strategy();
        let TierProfile {
            dimensions,
            values,
            blank_slots,
            ..
        } = profile;
        Self {
            dimensions,
            values,
            blank_slots,
            strategy,
            layout: TierProfile::layout(),
        }
    }

    /// Replaces the pair-drawing strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: PairStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let puzzle = self.generate_with_rng(&mut seed.rng());
        GeneratedPuzzle { puzzle, seed }
    }

    /// Generates a puzzle driven by an arbitrary random source.
    pub fn generate_with_rng<R>(&self, rng: &mut R) -> PuzzleState
    where
        R: RandomSource + ?Sized,
    {
        let count = pair_capacity(self.dimensions);
        let pairs = into_sorted_pairs(draw_pairs(count, &self.values, self.strategy, rng));
        match build_puzzle(pairs, self.dimensions, &self.blank_slots, self.layout, rng) {
            Ok(puzzle) => puzzle,
            Err(err) => unreachable!("settings were validated on construction: {err}"),
        }
    }
}

/// Generates a free-play puzzle from `config`.
///
/// # Errors
///
/// Returns an error if `config` is invalid; see [`PuzzleGenerator::new`].
pub fn generate_puzzle(config: &PuzzleConfig) -> Result<PuzzleState, GeneratorError> {
    Ok(PuzzleGenerator::new(config)?.generate().puzzle)
}

fn check_value_range(min: u32, max: u32) -> Result<RangeInclusive<u32>, GeneratorError> {
    if min > max {
        return Err(GeneratorError::InvalidValueRange { min, max });
    }
    if max.checked_mul(max).is_none() || max.checked_add(max).is_none() {
        return Err(GeneratorError::ValueOverflow { max });
    }
    Ok(min..=max)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use tetonor_core::{Difficulty, NumberPair};
    use tetonor_random::Mulberry32;
    use tetonor_validator::validate_puzzle;

    use super::*;

    #[test]
    fn test_rejects_invalid_configs() {
        let odd = PuzzleConfig {
            rows: 3,
            cols: 3,
            ..PuzzleConfig::default()
        };
        assert_eq!(
            generate_puzzle(&odd),
            Err(GeneratorError::OddCellCount { rows: 3, cols: 3 })
        );
        let empty_range = PuzzleConfig {
            min_value: 10,
            max_value: 2,
            ..PuzzleConfig::default()
        };
        assert_eq!(
            generate_puzzle(&empty_range),
            Err(GeneratorError::InvalidValueRange { min: 10, max: 2 })
        );
        let huge = PuzzleConfig {
            max_value: u32::MAX,
            ..PuzzleConfig::default()
        };
        assert_eq!(
            generate_puzzle(&huge),
            Err(GeneratorError::ValueOverflow { max: u32::MAX })
        );
        let oversized = PuzzleConfig {
            rows: usize::MAX,
            cols: 3,
            ..PuzzleConfig::default()
        };
        assert_eq!(
            PuzzleGenerator::new(&oversized),
            Err(GeneratorError::GridTooLarge {
                rows: usize::MAX,
                cols: 3,
            })
        );
    }

    #[test]
    fn test_default_config_puzzle() {
        let puzzle = generate_puzzle(&PuzzleConfig::default()).unwrap();
        assert_eq!(puzzle.dimensions, Dimensions::new(3, 4));
        assert_eq!(puzzle.grid.len(), 12);
        assert_eq!(puzzle.strip.len(), 6);
        assert_eq!(puzzle.hidden_slot_count(), 1);
        assert!(puzzle.grid.iter().all(|c| c.is_empty()));
        assert_eq!(puzzle.check_consistency(), Ok(()));
    }

    #[test]
    fn test_presets_have_no_blanks() {
        for difficulty in Difficulty::ALL {
            let puzzle = generate_puzzle(&PuzzleConfig::preset(difficulty)).unwrap();
            assert_eq!(puzzle.grid.len(), 16);
            assert_eq!(puzzle.hidden_slot_count(), 0);
        }
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let generator = PuzzleGenerator::for_tier(Tier::Advanced);
        let seed = PuzzleSeed::from_phrase("tetonor");
        assert_eq!(generator.generate_with_seed(seed), generator.generate_with_seed(seed));
    }

    #[test]
    fn test_strip_sorted_by_true_values() {
        let generator = PuzzleGenerator::for_tier(Tier::Advanced);
        let puzzle = generator.generate_with_rng(&mut Mulberry32::new(77));
        for w in puzzle.strip.windows(2) {
            assert!(w[0].cmp_by_true_values(&w[1]).is_le());
        }
        let ids = puzzle.strip.iter().map(|p| p.id.value()).collect::<Vec<_>>();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn test_with_strategy_still_balanced() {
        let generator =
            PuzzleGenerator::for_tier(Tier::Beginner).with_strategy(PairStrategy::Unconstrained);
        let puzzle = generator.generate_with_rng(&mut Mulberry32::new(3));
        assert_eq!(puzzle.check_consistency(), Ok(()));
    }

    fn any_config() -> impl Strategy<Value = PuzzleConfig> {
        (
            1_usize..=5,
            1_usize..=3,
            1_u32..=20,
            0_u32..=40,
            0_usize..=12,
            prop::sample::select(Difficulty::ALL.to_vec()),
        )
            .prop_map(|(rows, half_cols, min_value, width, blank_pairs, difficulty)| {
                PuzzleConfig {
                    rows,
                    cols: half_cols * 2,
                    min_value,
                    max_value: min_value + width,
                    blank_pairs,
                    difficulty,
                }
            })
    }

    proptest! {
        #[test]
        fn test_generated_puzzles_are_balanced(config in any_config(), seed in any::<u32>()) {
            let generator = PuzzleGenerator::new(&config).unwrap();
            let puzzle = generator.generate_with_rng(&mut Mulberry32::new(seed));
            prop_assert_eq!(puzzle.check_consistency(), Ok(()));
            prop_assert_eq!(
                puzzle.hidden_slot_count(),
                config.blank_pairs.min(config.rows * config.cols)
            );
            for pair in &puzzle.strip {
                let (a, b) = pair.true_values().unwrap();
                prop_assert!(a <= b);
                prop_assert!(a >= config.min_value && b <= config.max_value);
            }
        }

        #[test]
        fn test_solution_round_trips_through_validator(tier_index in 0_usize..3, seed in any::<u32>()) {
            let generator = PuzzleGenerator::for_tier(Tier::ALL[tier_index]);
            let mut puzzle = generator.generate_with_rng(&mut Mulberry32::new(seed));
            let sorted = puzzle.strip.iter().map(NumberPair::true_values).collect::<Vec<_>>();
            puzzle.fill_with_solution().unwrap();
            let validation = validate_puzzle(&puzzle);
            prop_assert!(validation.is_correct, "{:?}", validation.errors);
            prop_assert!(validation.is_complete);
            prop_assert!(validation.errors.is_empty());
            let mut resorted = sorted.clone();
            resorted.sort_unstable();
            prop_assert_eq!(sorted, resorted);
        }
    }
}
