//! Deterministic randomness and calendar helpers for Tetonor.
//!
//! Puzzle construction never talks to a random number generator directly. It
//! draws from a [`RandomSource`], which yields floats in `[0, 1)`. Two sources
//! are provided:
//!
//! - [`Mulberry32`]: a tiny 32-bit generator used for daily challenges, where
//!   every player must get the same puzzle for a given date.
//! - [`rand_pcg::Pcg64`]: used for free-play puzzles, seeded from ambient
//!   entropy by the generator crate.
//!
//! Integer draws ([`seeded_random_int`]) and shuffles ([`seeded_shuffle`]) are
//! written once against [`RandomSource`], so both paths share one algorithm.
//!
//! # Examples
//!
//! ```
//! use tetonor_random::{Mulberry32, hash_string, seeded_random_int, seeded_shuffle};
//!
//! let mut rng = Mulberry32::new(hash_string("tetonor-daily-2025-01-01"));
//! let roll = seeded_random_int(1, 9, &mut rng);
//! assert!((1..=9).contains(&roll));
//!
//! let shuffled = seeded_shuffle(&[1, 2, 3, 4], &mut rng);
//! assert_eq!(shuffled.len(), 4);
//! ```

pub mod date;
mod mulberry32;
mod seeded;
mod source;

pub use self::{
    date::{DateParseError, LAUNCH_DATE},
    mulberry32::Mulberry32,
    seeded::{hash_string, seeded_random_int, seeded_shuffle, shuffle_in_place},
    source::RandomSource,
};
