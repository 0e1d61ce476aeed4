//! Core data structures for Tetonor puzzles.
//!
//! A Tetonor puzzle consists of a *strip* of number pairs and a *grid* of target
//! cells. Every pair on the strip must be consumed exactly twice across the grid:
//! once to reach a target by addition and once to reach a target by
//! multiplication. Some strip values may be hidden from the player; their true
//! values are always kept as shadow copies so ordering and hints keep working.
//!
//! # Overview
//!
//! - [`operation`]: The two arithmetic operations a cell can exercise.
//! - [`pair`]: [`NumberPair`] strip entries, including hidden slots.
//! - [`cell`]: [`GridCell`] target cells and the player's entry.
//! - [`puzzle`]: The [`PuzzleState`] aggregate and its consistency check.
//! - [`config`]: [`PuzzleConfig`] generation parameters and [`Difficulty`].
//!
//! # Examples
//!
//! ```
//! use tetonor_core::{CellId, GridCell, NumberPair, Operation, PairId};
//!
//! let pair = NumberPair::new(PairId::new(1), 7, 3);
//! assert_eq!((pair.first, pair.second), (Some(3), Some(7)));
//!
//! let mut cell = GridCell::new(CellId::new(0), 10, Operation::Add, pair.id);
//! cell.set_entry(7, 3, Operation::Add);
//! assert!(cell.is_filled());
//! ```

pub mod cell;
pub mod config;
pub mod operation;
pub mod pair;
pub mod puzzle;

pub use self::{
    cell::{CellId, GridCell},
    config::{Difficulty, ParseDifficultyError, PuzzleConfig},
    operation::Operation,
    pair::{NumberPair, PairId, Slot},
    puzzle::{ConsistencyError, Dimensions, PuzzleState},
};
