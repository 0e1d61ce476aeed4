//! The puzzle aggregate.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{CellId, GridCell, NumberPair, Operation, PairId};

/// Grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl Dimensions {
    /// Creates dimensions from a row and column count.
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Returns `rows * cols`, or `None` if the product overflows `usize`.
    #[must_use]
    pub const fn cell_count(self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }
}

/// Violation of the construction-time puzzle invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConsistencyError {
    /// `rows * cols` overflows `usize`.
    #[display("grid dimensions {rows}x{cols} are too large")]
    GridTooLarge {
        /// Declared rows.
        rows: usize,
        /// Declared columns.
        cols: usize,
    },
    /// The grid length does not equal `rows * cols`.
    #[display("grid has {cells} cells but dimensions are {rows}x{cols}")]
    CellCountMismatch {
        /// Declared rows.
        rows: usize,
        /// Declared columns.
        cols: usize,
        /// Actual number of cells.
        cells: usize,
    },
    /// The grid does not hold exactly two cells per strip pair.
    #[display("grid has {cells} cells for {pairs} pairs")]
    StripSizeMismatch {
        /// Actual number of cells.
        cells: usize,
        /// Number of strip pairs.
        pairs: usize,
    },
    /// Two strip entries share an id.
    #[display("duplicate pair id {pair}")]
    DuplicatePairId {
        /// The repeated id.
        pair: PairId,
    },
    /// A cell references a pair that is not on the strip.
    #[display("{cell} references missing {pair}")]
    MissingSolutionPair {
        /// The referencing cell.
        cell: CellId,
        /// The missing pair id.
        pair: PairId,
    },
    /// A pair's true values cannot be recovered.
    #[display("{pair} has a hidden value without a shadow copy")]
    UnrecoverablePair {
        /// The broken pair.
        pair: PairId,
    },
    /// A cell's target does not equal the result of its solution pair.
    #[display("{cell} target {actual} does not match expected {expected}")]
    TargetMismatch {
        /// The cell.
        cell: CellId,
        /// The solution pair's result under the cell's operation.
        expected: u32,
        /// The stored target.
        actual: u32,
    },
    /// A pair is not referenced by exactly one cell per operation.
    #[display("{pair} is referenced by {add_cells} add and {multiply_cells} multiply cells")]
    PairUsageMismatch {
        /// The pair.
        pair: PairId,
        /// Number of `add` cells referencing it.
        add_cells: usize,
        /// Number of `multiply` cells referencing it.
        multiply_cells: usize,
    },
}

/// Complete puzzle state: the grid, the strip and the grid dimensions.
///
/// `grid` is in display order (row-major). `strip` is in display order,
/// ascending by the pairs' true values.
///
/// # Examples
///
/// ```
/// use tetonor_core::{CellId, Dimensions, GridCell, NumberPair, Operation, PairId, PuzzleState};
///
/// let pair = NumberPair::new(PairId::new(1), 3, 7);
/// let puzzle = PuzzleState {
///     grid: vec![
///         GridCell::new(CellId::new(0), 10, Operation::Add, pair.id),
///         GridCell::new(CellId::new(1), 21, Operation::Multiply, pair.id),
///     ],
///     strip: vec![pair],
///     dimensions: Dimensions::new(1, 2),
/// };
/// assert!(puzzle.check_consistency().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PuzzleState {
    /// Target cells in display order.
    pub grid: Vec<GridCell>,
    /// Number pairs in display order.
    pub strip: Vec<NumberPair>,
    /// Grid dimensions.
    pub dimensions: Dimensions,
}

impl PuzzleState {
    /// Looks up a strip pair by id.
    #[must_use]
    pub fn pair(&self, id: PairId) -> Option<&NumberPair> {
        self.strip.iter().find(|pair| pair.id == id)
    }

    /// Looks up a grid cell by id.
    #[must_use]
    pub fn cell(&self, id: CellId) -> Option<&GridCell> {
        self.grid.iter().find(|cell| cell.id == id)
    }

    /// Looks up a grid cell by id for player input.
    pub fn cell_mut(&mut self, id: CellId) -> Option<&mut GridCell> {
        self.grid.iter_mut().find(|cell| cell.id == id)
    }

    /// Returns the pair a cell's target was built from.
    #[must_use]
    pub fn solution_pair(&self, cell: &GridCell) -> Option<&NumberPair> {
        self.pair(cell.solution_pair_id)
    }

    /// Iterates over the grid row by row.
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.grid.chunks(self.dimensions.cols.max(1))
    }

    /// Returns the number of hidden strip slots.
    #[must_use]
    pub fn hidden_slot_count(&self) -> usize {
        self.strip.iter().map(NumberPair::hidden_count).sum()
    }

    /// Returns `true` if every cell has a complete player entry.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.grid.iter().all(GridCell::is_filled)
    }

    /// Clears every player entry without touching targets or the strip.
    pub fn reset(&mut self) {
        for cell in &mut self.grid {
            cell.clear();
        }
    }

    /// Fills every cell with its solution pair's true values and operation.
    ///
    /// # Errors
    ///
    /// Returns [`ConsistencyError::MissingSolutionPair`] or
    /// [`ConsistencyError::UnrecoverablePair`] if a cell's solution cannot be
    /// resolved. The grid is left untouched in that case.
    pub fn fill_with_solution(&mut self) -> Result<(), ConsistencyError> {
        let values = self
            .strip
            .iter()
            .map(|pair| (pair.id, pair.true_values()))
            .collect::<HashMap<_, _>>();
        let solutions = self
            .grid
            .iter()
            .map(|cell| {
                let pair = cell.solution_pair_id;
                values
                    .get(&pair)
                    .copied()
                    .ok_or(ConsistencyError::MissingSolutionPair {
                        cell: cell.id,
                        pair,
                    })?
                    .ok_or(ConsistencyError::UnrecoverablePair { pair })
            })
            .collect::<Result<Vec<_>, _>>()?;
        for (cell, (first, second)) in self.grid.iter_mut().zip(solutions) {
            cell.set_entry(first, second, cell.operation);
        }
        Ok(())
    }

    /// Verifies the construction-time invariant.
    ///
    /// Every strip pair must be referenced by exactly one `add` cell and one
    /// `multiply` cell whose targets equal the pair's true sum and product, and
    /// the grid must hold `rows * cols == 2 * strip.len()` cells.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConsistencyError`] found.
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        let Dimensions { rows, cols } = self.dimensions;
        let cells = self.grid.len();
        let declared = self
            .dimensions
            .cell_count()
            .ok_or(ConsistencyError::GridTooLarge { rows, cols })?;
        if declared != cells {
            return Err(ConsistencyError::CellCountMismatch { rows, cols, cells });
        }
        let pairs = self.strip.len();
        if cells != pairs * 2 {
            return Err(ConsistencyError::StripSizeMismatch { cells, pairs });
        }

        let mut usage = HashMap::with_capacity(pairs);
        for pair in &self.strip {
            if usage.insert(pair.id, (0, 0)).is_some() {
                return Err(ConsistencyError::DuplicatePairId { pair: pair.id });
            }
        }

        for cell in &self.grid {
            let pair = self
                .pair(cell.solution_pair_id)
                .ok_or(ConsistencyError::MissingSolutionPair {
                    cell: cell.id,
                    pair: cell.solution_pair_id,
                })?;
            let (first, second) = pair
                .true_values()
                .ok_or(ConsistencyError::UnrecoverablePair { pair: pair.id })?;
            let expected = cell.operation.apply(first, second);
            if expected != Some(cell.target) {
                return Err(ConsistencyError::TargetMismatch {
                    cell: cell.id,
                    expected: expected.unwrap_or(u32::MAX),
                    actual: cell.target,
                });
            }
            if let Some((add, multiply)) = usage.get_mut(&pair.id) {
                match cell.operation {
                    Operation::Add => *add += 1,
                    Operation::Multiply => *multiply += 1,
                }
            }
        }

        for pair in &self.strip {
            let (add_cells, multiply_cells) = usage.get(&pair.id).copied().unwrap_or_default();
            if add_cells != 1 || multiply_cells != 1 {
                return Err(ConsistencyError::PairUsageMismatch {
                    pair: pair.id,
                    add_cells,
                    multiply_cells,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Slot;

    fn two_pair_puzzle() -> PuzzleState {
        let a = NumberPair::new(PairId::new(1), 3, 7);
        let b = NumberPair::new(PairId::new(2), 2, 26);
        PuzzleState {
            grid: vec![
                GridCell::new(CellId::new(0), 52, Operation::Multiply, b.id),
                GridCell::new(CellId::new(1), 10, Operation::Add, a.id),
                GridCell::new(CellId::new(2), 28, Operation::Add, b.id),
                GridCell::new(CellId::new(3), 21, Operation::Multiply, a.id),
            ],
            strip: vec![b, a],
            dimensions: Dimensions::new(2, 2),
        }
    }

    #[test]
    fn test_consistent_puzzle() {
        let puzzle = two_pair_puzzle();
        assert_eq!(puzzle.check_consistency(), Ok(()));
        assert_eq!(puzzle.rows().count(), 2);
    }

    #[test]
    fn test_hidden_values_stay_consistent() {
        let mut puzzle = two_pair_puzzle();
        puzzle.strip[0].hide(Slot::First);
        puzzle.strip[1].hide(Slot::First);
        puzzle.strip[1].hide(Slot::Second);
        assert_eq!(puzzle.hidden_slot_count(), 3);
        assert_eq!(puzzle.check_consistency(), Ok(()));
    }

    #[test]
    fn test_detects_target_mismatch() {
        let mut puzzle = two_pair_puzzle();
        puzzle.grid[1].target = 11;
        assert_eq!(
            puzzle.check_consistency(),
            Err(ConsistencyError::TargetMismatch {
                cell: CellId::new(1),
                expected: 10,
                actual: 11,
            })
        );
    }

    #[test]
    fn test_detects_double_add() {
        let mut puzzle = two_pair_puzzle();
        puzzle.grid[3] = GridCell::new(CellId::new(3), 10, Operation::Add, PairId::new(1));
        assert_eq!(
            puzzle.check_consistency(),
            Err(ConsistencyError::PairUsageMismatch {
                pair: PairId::new(1),
                add_cells: 2,
                multiply_cells: 0,
            })
        );
    }

    #[test]
    fn test_detects_dimension_mismatch() {
        let mut puzzle = two_pair_puzzle();
        puzzle.dimensions = Dimensions::new(3, 3);
        assert!(matches!(
            puzzle.check_consistency(),
            Err(ConsistencyError::CellCountMismatch { cells: 4, .. })
        ));
    }

    #[test]
    fn test_detects_overflowing_dimensions() {
        let mut puzzle = two_pair_puzzle();
        puzzle.dimensions = Dimensions::new(1 << 33, 1 << 33);
        assert_eq!(puzzle.dimensions.cell_count(), None);
        assert_eq!(
            puzzle.check_consistency(),
            Err(ConsistencyError::GridTooLarge {
                rows: 1 << 33,
                cols: 1 << 33,
            })
        );
    }

    #[test]
    fn test_failed_fill_leaves_grid_untouched() {
        let mut puzzle = two_pair_puzzle();
        puzzle.grid[3].solution_pair_id = PairId::new(9);
        let before = puzzle.clone();
        assert_eq!(
            puzzle.fill_with_solution(),
            Err(ConsistencyError::MissingSolutionPair {
                cell: CellId::new(3),
                pair: PairId::new(9),
            })
        );
        assert_eq!(puzzle, before);
        assert!(puzzle.grid.iter().all(GridCell::is_empty));
    }

    #[test]
    fn test_fill_with_solution_and_reset() {
        let mut puzzle = two_pair_puzzle();
        puzzle.strip[0].hide(Slot::Second);
        puzzle.fill_with_solution().unwrap();
        assert!(puzzle.is_filled());
        assert_eq!(puzzle.grid[0].entry(), Some((2, 26, Operation::Multiply)));

        let before = puzzle.grid.iter().map(|c| c.target).collect::<Vec<_>>();
        puzzle.reset();
        assert!(puzzle.grid.iter().all(GridCell::is_empty));
        let after = puzzle.grid.iter().map(|c| c.target).collect::<Vec<_>>();
        assert_eq!(before, after);
    }

    #[test]
    fn test_cell_mut_updates_entry() {
        let mut puzzle = two_pair_puzzle();
        puzzle
            .cell_mut(CellId::new(1))
            .unwrap()
            .set_entry(7, 3, Operation::Add);
        assert!(puzzle.cell(CellId::new(1)).unwrap().is_filled());
        assert!(puzzle.cell_mut(CellId::new(9)).is_none());
    }
}
