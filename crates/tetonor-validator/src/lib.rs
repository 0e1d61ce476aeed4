//! Checking player entries against a Tetonor puzzle.
//!
//! Two levels of checking are offered:
//!
//! - [`validate_cell`] gives lenient, per-cell feedback: does the entry reach
//!   the target, and do its numbers appear somewhere on the strip?
//! - [`validate_puzzle`] is the authoritative whole-board check. Every strip
//!   pair must be claimed by exactly one addition cell and one multiplication
//!   cell; claims are made greedily in grid order (see [`ClaimStrategy`]).
//!
//! Validation never fails: incomplete cells, wrong results, unknown pairs and
//! reuse conflicts are all reported as data.
//!
//! Hidden strip values take part through their shadow copies, so a player who
//! deduced a hidden value is judged against the true value.

pub use self::{
    cell::{CellMessage, CellValidation, find_matching_pair, is_input_valid, validate_cell},
    claim::{ClaimStrategy, PairUsage, find_available_pair},
    hint::{Hint, get_hint_for_cell, get_valid_pairs_for_cell},
    puzzle::{PairUsageError, PuzzleValidation, validate_puzzle, validate_puzzle_with},
};

mod cell;
mod claim;
mod hint;
mod puzzle;
