use serde::Serialize;
use tetonor_core::{CellId, GridCell, NumberPair, Operation, PuzzleState};

/// A nudge towards a cell's intended pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
#[serde(rename_all = "camelCase")]
#[display("Try {} {first} and {second}", operation.gerund())]
pub struct Hint {
    /// The cell the hint is for.
    pub cell_id: CellId,
    /// The cell's operation.
    pub operation: Operation,
    /// First true value of the solution pair.
    pub first: u32,
    /// Second true value of the solution pair.
    pub second: u32,
}

/// Returns a hint naming the true values of the cell's solution pair.
///
/// Hidden strip values are read from their shadow copies. Returns `None` if
/// the pair is missing from the strip or a value cannot be recovered.
///
/// # Examples
///
/// ```
/// use tetonor_core::{CellId, Dimensions, GridCell, NumberPair, Operation, PairId, PuzzleState, Slot};
/// use tetonor_validator::get_hint_for_cell;
///
/// let mut pair = NumberPair::new(PairId::new(1), 3, 7);
/// pair.hide(Slot::First);
/// let cell = GridCell::new(CellId::new(0), 21, Operation::Multiply, pair.id);
/// let puzzle = PuzzleState {
///     grid: vec![cell.clone()],
///     strip: vec![pair],
///     dimensions: Dimensions::new(1, 1),
/// };
///
/// let hint = get_hint_for_cell(&cell, &puzzle).unwrap();
/// assert_eq!(hint.to_string(), "Try multiplying 3 and 7");
/// ```
#[must_use]
pub fn get_hint_for_cell(cell: &GridCell, puzzle: &PuzzleState) -> Option<Hint> {
    let (first, second) = puzzle.solution_pair(cell)?.true_values()?;
    Some(Hint {
        cell_id: cell.id,
        operation: cell.operation,
        first,
        second,
    })
}

/// Returns the fully visible pairs whose result under the cell's operation
/// equals its target.
#[must_use]
pub fn get_valid_pairs_for_cell<'a>(
    cell: &GridCell,
    available_pairs: &'a [NumberPair],
) -> Vec<&'a NumberPair> {
    available_pairs
        .iter()
        .filter(|pair| {
            pair.visible_values().is_some_and(|(first, second)| {
                cell.operation.apply(first, second) == Some(cell.target)
            })
        })
        .collect()
}
