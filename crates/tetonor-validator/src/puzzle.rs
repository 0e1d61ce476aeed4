use std::fmt;

use serde::{Serialize, Serializer};
use tetonor_core::{PairId, PuzzleState};

use crate::{
    CellMessage, CellValidation, ClaimStrategy, PairUsage, claim::claim_pairs,
    find_matching_pair, is_input_valid,
};

/// A strip pair that did not end up claimed once for each operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairUsageError {
    /// The pair.
    pub pair_id: PairId,
    /// The pair's true values, if recoverable.
    pub values: Option<(u32, u32)>,
}

impl fmt::Display for PairUsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.values {
            Some((first, second)) => write!(f, "Pair ({first}, {second})")?,
            None => write!(f, "Pair {}", self.pair_id)?,
        }
        f.write_str(
            " not used correctly - must be used once for addition and once for multiplication",
        )
    }
}

impl Serialize for PairUsageError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Result of checking the whole puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleValidation {
    /// Every cell has a claimed pair and reaches its target.
    pub is_complete: bool,
    /// `is_complete && pair_usage_valid && errors.is_empty()`.
    pub is_correct: bool,
    /// Per-cell results in grid order.
    pub cell_validations: Vec<CellValidation>,
    /// Every pair was claimed once for each operation.
    pub pair_usage_valid: bool,
    /// Claim state per strip pair, in strip order.
    pub pair_usage: Vec<PairUsage>,
    /// One entry per pair that is not fully used.
    pub errors: Vec<PairUsageError>,
}

/// Checks the whole puzzle with greedy first-claim allocation.
///
/// Cells are visited in grid order. A complete cell claims the first strip
/// pair matching its numbers that is still free for its operation; a later
/// cell entering the same numbers for the same operation is reported as
/// [`CellMessage::PairAlreadyUsed`].
///
/// # Examples
///
/// ```
/// use tetonor_core::{CellId, Dimensions, GridCell, NumberPair, Operation, PairId, PuzzleState};
/// use tetonor_validator::validate_puzzle;
///
/// let pair = NumberPair::new(PairId::new(1), 3, 7);
/// let mut puzzle = PuzzleState {
///     grid: vec![
///         GridCell::new(CellId::new(0), 10, Operation::Add, pair.id),
///         GridCell::new(CellId::new(1), 21, Operation::Multiply, pair.id),
///     ],
///     strip: vec![pair],
///     dimensions: Dimensions::new(1, 2),
/// };
/// puzzle.grid[0].set_entry(3, 7, Operation::Add);
/// puzzle.grid[1].set_entry(7, 3, Operation::Multiply);
///
/// let validation = validate_puzzle(&puzzle);
/// assert!(validation.is_correct);
/// assert!(validation.errors.is_empty());
/// ```
#[must_use]
pub fn validate_puzzle(puzzle: &PuzzleState) -> PuzzleValidation {
    validate_puzzle_with(puzzle, ClaimStrategy::Greedy)
}

/// Checks the whole puzzle with the given claim strategy.
#[must_use]
pub fn validate_puzzle_with(puzzle: &PuzzleState, strategy: ClaimStrategy) -> PuzzleValidation {
    let (claims, pair_usage) = claim_pairs(&puzzle.grid, &puzzle.strip, strategy);

    let cell_validations = puzzle
        .grid
        .iter()
        .zip(&claims)
        .map(|(cell, claim)| {
            let Some((first, second, operation)) = cell.entry() else {
                return CellValidation::incomplete(cell, puzzle);
            };
            let has_correct_operation = is_input_valid(first, second, cell.target, operation);
            let has_correct_pair = claim.is_some();
            let message = if !has_correct_operation {
                CellMessage::ResultMismatch
            } else if find_matching_pair(&puzzle.strip, first, second).is_none() {
                CellMessage::PairNotFound
            } else if !has_correct_pair {
                CellMessage::PairAlreadyUsed
            } else {
                CellMessage::Correct
            };
            CellValidation {
                cell_id: cell.id,
                is_correct: has_correct_pair && has_correct_operation,
                has_correct_pair,
                has_correct_operation,
                expected_pair: puzzle.solution_pair(cell).cloned(),
                message,
            }
        })
        .collect::<Vec<_>>();

    let errors = puzzle
        .strip
        .iter()
        .zip(&pair_usage)
        .filter(|(_, usage)| !usage.is_resolved())
        .map(|(pair, _)| PairUsageError {
            pair_id: pair.id,
            values: pair.true_values(),
        })
        .collect::<Vec<_>>();

    let pair_usage_valid = pair_usage.iter().all(PairUsage::is_resolved);
    let is_complete = cell_validations
        .iter()
        .all(|v| v.has_correct_pair && v.has_correct_operation);
    let is_correct = is_complete && pair_usage_valid && errors.is_empty();

    PuzzleValidation {
        is_complete,
        is_correct,
        cell_validations,
        pair_usage_valid,
        pair_usage,
        errors,
    }
}
