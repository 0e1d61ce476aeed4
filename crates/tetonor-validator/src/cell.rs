use serde::Serialize;
use tetonor_core::{CellId, GridCell, NumberPair, Operation, PuzzleState};

/// Outcome message of a cell check, in priority order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "camelCase")]
pub enum CellMessage {
    /// An operand or the operation is missing.
    #[display("Cell incomplete")]
    Incomplete,
    /// The entered operation does not produce the target.
    #[display("Result does not match target")]
    ResultMismatch,
    /// No strip pair has the entered numbers.
    #[display("Pair not found in strip")]
    PairNotFound,
    /// Every strip pair with the entered numbers is already claimed for the
    /// entered operation by an earlier cell.
    #[display("Pair already used for this operation")]
    PairAlreadyUsed,
    /// The entry is correct.
    #[display("Correct!")]
    Correct,
}

/// Result of checking one grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellValidation {
    /// The checked cell.
    pub cell_id: CellId,
    /// `has_correct_pair && has_correct_operation`.
    pub is_correct: bool,
    /// A usable strip pair has the entered numbers.
    pub has_correct_pair: bool,
    /// The entered numbers and operation produce the target.
    pub has_correct_operation: bool,
    /// The pair the cell's target was built from, if it is on the strip.
    pub expected_pair: Option<NumberPair>,
    /// Summary of the outcome.
    pub message: CellMessage,
}

impl CellValidation {
    pub(crate) fn incomplete(cell: &GridCell, puzzle: &PuzzleState) -> Self {
        Self {
            cell_id: cell.id,
            is_correct: false,
            has_correct_pair: false,
            has_correct_operation: false,
            expected_pair: puzzle.solution_pair(cell).cloned(),
            message: CellMessage::Incomplete,
        }
    }
}

/// Returns `true` if `operation` applied to the operands yields `target`.
///
/// # Examples
///
/// ```
/// use tetonor_core::Operation;
/// use tetonor_validator::is_input_valid;
///
/// assert!(is_input_valid(3, 7, 10, Operation::Add));
/// assert!(!is_input_valid(3, 7, 10, Operation::Multiply));
/// ```
#[must_use]
pub fn is_input_valid(first: u32, second: u32, target: u32, operation: Operation) -> bool {
    operation.apply(first, second) == Some(target)
}

/// Finds the first strip pair whose true values are `{first, second}`.
#[must_use]
pub fn find_matching_pair(strip: &[NumberPair], first: u32, second: u32) -> Option<&NumberPair> {
    strip.iter().find(|pair| pair.matches(first, second))
}

/// Checks one cell in isolation.
///
/// The pair check only asks whether the entered numbers appear somewhere on
/// the strip; it ignores whether another cell already uses that pair. Use
/// [`validate_puzzle`](crate::validate_puzzle) for the authoritative check.
///
/// # Examples
///
/// ```
/// use tetonor_core::{CellId, GridCell, NumberPair, Operation, PairId};
/// # use tetonor_core::{Dimensions, PuzzleState};
/// use tetonor_validator::{CellMessage, validate_cell};
///
/// let pair = NumberPair::new(PairId::new(1), 3, 7);
/// # let puzzle = PuzzleState {
/// #     grid: vec![],
/// #     strip: vec![pair.clone()],
/// #     dimensions: Dimensions::new(0, 0),
/// # };
/// let mut cell = GridCell::new(CellId::new(0), 10, Operation::Add, pair.id);
/// cell.set_entry(3, 7, Operation::Multiply);
///
/// let validation = validate_cell(&cell, &puzzle);
/// assert!(!validation.has_correct_operation);
/// assert_eq!(validation.message, CellMessage::ResultMismatch);
/// ```
#[must_use]
pub fn validate_cell(cell: &GridCell, puzzle: &PuzzleState) -> CellValidation {
    let Some((first, second, operation)) = cell.entry() else {
        return CellValidation::incomplete(cell, puzzle);
    };

    let has_correct_operation = is_input_valid(first, second, cell.target, operation);
    let has_correct_pair = find_matching_pair(&puzzle.strip, first, second).is_some();
    let is_correct = has_correct_pair && has_correct_operation;
    let message = if is_correct {
        CellMessage::Correct
    } else if !has_correct_operation {
        CellMessage::ResultMismatch
    } else {
        CellMessage::PairNotFound
    };

    CellValidation {
        cell_id: cell.id,
        is_correct,
        has_correct_pair,
        has_correct_operation,
        expected_pair: puzzle.solution_pair(cell).cloned(),
        message,
    }
}
