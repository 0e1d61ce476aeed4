//! Difficulty-tuned 4x4 puzzles.

use std::ops::RangeInclusive;

use tetonor_core::{Dimensions, PuzzleState};

use crate::{BlankLayout, CollisionBudget, PairStrategy, PuzzleGenerator};

/// A difficulty tier of the tuned generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum Tier {
    /// 5 or 6 hidden slots.
    #[display("beginner")]
    Beginner,
    /// 7 or 8 hidden slots.
    #[display("intermediate")]
    Intermediate,
    /// 10 or 11 hidden slots.
    #[display("advanced")]
    Advanced,
}

impl Tier {
    /// All tiers, easiest first.
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Returns the generation parameters of this tier.
    #[must_use]
    pub fn profile(self) -> TierProfile {
        let blank_slots = match self {
            Self::Beginner => 5..=6,
            Self::Intermediate => 7..=8,
            Self::Advanced => 10..=11,
        };
        TierProfile {
            dimensions: Dimensions::new(4, 4),
            values: 1..=50,
            blank_slots,
            budget: CollisionBudget::default(),
        }
    }
}

/// Parameters layered on the shared builder by a [`Tier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierProfile {
    /// Grid size; always 4x4 (8 pairs).
    pub dimensions: Dimensions,
    /// Inclusive value range of drawn numbers.
    pub values: RangeInclusive<u32>,
    /// Inclusive range the hidden slot count is drawn from.
    pub blank_slots: RangeInclusive<usize>,
    /// Target-collision allowance while drawing pairs.
    pub budget: CollisionBudget,
}

impl TierProfile {
    pub(crate) fn strategy(&self) -> PairStrategy {
        PairStrategy::CollisionBudget(self.budget)
    }

    pub(crate) const fn layout() -> BlankLayout {
        BlankLayout::Scattered
    }
}

/// Generates an 8-pair puzzle with 5-6 hidden slots.
#[must_use]
pub fn generate_beginner_puzzle() -> PuzzleState {
    PuzzleGenerator::for_tier(Tier::Beginner).generate().puzzle
}

/// Generates an 8-pair puzzle with 7-8 hidden slots.
#[must_use]
pub fn generate_intermediate_puzzle() -> PuzzleState {
    PuzzleGenerator::for_tier(Tier::Intermediate).generate().puzzle
}

/// Generates an 8-pair puzzle with 10-11 hidden slots.
#[must_use]
pub fn generate_advanced_puzzle() -> PuzzleState {
    PuzzleGenerator::for_tier(Tier::Advanced).generate().puzzle
}
