//! Tetonor puzzle generation.
//!
//! A puzzle is built in three steps that every entry point shares:
//!
//! 1. draw unique number pairs ([`draw_pairs`], sorted by [`into_sorted_pairs`]),
//! 2. emit one addition and one multiplication cell per pair and shuffle them
//!    ([`assign_pairs_to_grid`]),
//! 3. hide some strip values while keeping their true values in shadow fields
//!    ([`apply_blanks`]).
//!
//! All randomness comes from an injected [`RandomSource`], so the same
//! algorithm serves free play ([`PuzzleGenerator`], seeded from a
//! [`PuzzleSeed`]) and date-seeded daily puzzles.
//!
//! # Examples
//!
//! ```
//! use tetonor_generator::{PuzzleGenerator, Tier};
//!
//! let generated = PuzzleGenerator::for_tier(Tier::Intermediate).generate();
//! let puzzle = generated.puzzle;
//! assert_eq!(puzzle.grid.len(), 16);
//! assert!((7..=8).contains(&puzzle.hidden_slot_count()));
//! assert!(puzzle.check_consistency().is_ok());
//! ```
//!
//! [`RandomSource`]: tetonor_random::RandomSource

pub use self::{
    blanks::{BlankLayout, apply_blanks, apply_blanks_to_strip},
    error::GeneratorError,
    fixed::create_fixed_puzzle,
    generator::{GeneratedPuzzle, PuzzleGenerator, generate_puzzle},
    grid::{assign_pairs_to_grid, build_puzzle, check_dimensions},
    pairs::{
        CollisionBudget, PairStrategy, count_target_collisions, draw_canonical_pair, draw_pairs,
        generate_number_pairs, into_sorted_pairs,
    },
    seed::{PuzzleSeed, PuzzleSeedParseError},
    tier::{
        Tier, TierProfile, generate_advanced_puzzle, generate_beginner_puzzle,
        generate_intermediate_puzzle,
    },
};

mod blanks;
mod error;
mod fixed;
mod generator;
mod grid;
mod pairs;
mod seed;
mod tier;
