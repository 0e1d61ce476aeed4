use tetonor_core::{CellId, Dimensions, GridCell, NumberPair, Operation, PairId, PuzzleState};

const PAIRS: [(u32, u32, u32); 8] = [
    (1, 18, 19),
    (2, 20, 21),
    (3, 6, 44),
    (4, 10, 50),
    (5, 8, 32),
    (6, 8, 24),
    (7, 14, 24),
    (8, 2, 26),
];

// (target, operation, pair id), row by row.
const CELLS: [(u32, Operation, u32); 16] = [
    (38, Operation::Add, 7),
    (500, Operation::Multiply, 4),
    (37, Operation::Add, 1),
    (28, Operation::Add, 8),
    (420, Operation::Multiply, 2),
    (50, Operation::Add, 3),
    (256, Operation::Multiply, 5),
    (40, Operation::Add, 5),
    (41, Operation::Add, 2),
    (264, Operation::Multiply, 3),
    (32, Operation::Add, 6),
    (336, Operation::Multiply, 7),
    (192, Operation::Multiply, 6),
    (52, Operation::Multiply, 8),
    (342, Operation::Multiply, 1),
    (60, Operation::Add, 4),
];

/// Returns the built-in 8-pair demo puzzle.
///
/// Nothing is hidden and no randomness is involved; every call returns the
/// same puzzle.
#[must_use]
pub fn create_fixed_puzzle() -> PuzzleState {
    let mut strip = PAIRS
        .iter()
        .map(|&(id, a, b)| NumberPair::new(PairId::new(id), a, b))
        .collect::<Vec<_>>();
    strip.sort_by(NumberPair::cmp_by_true_values);

    let grid = (0..)
        .zip(CELLS)
        .map(|(id, (target, operation, pair))| {
            GridCell::new(CellId::new(id), target, operation, PairId::new(pair))
        })
        .collect();

    PuzzleState {
        grid,
        strip,
        dimensions: Dimensions::new(4, 4),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_puzzle_is_consistent() {
        let puzzle = create_fixed_puzzle();
        assert_eq!(puzzle.check_consistency(), Ok(()));
        assert_eq!(puzzle.hidden_slot_count(), 0);
        assert_eq!(puzzle, create_fixed_puzzle());
    }

    #[test]
    fn test_fixed_strip_display_order() {
        let puzzle = create_fixed_puzzle();
        let values = puzzle
            .strip
            .iter()
            .filter_map(NumberPair::visible_values)
            .collect::<Vec<_>>();
        assert_eq!(
            values,
            [(2, 26), (6, 44), (8, 24), (8, 32), (10, 50), (14, 24), (18, 19), (20, 21)]
        );
        assert_eq!(puzzle.grid[0].id.to_string(), "cell-0");
        assert_eq!(puzzle.strip[0].id.to_string(), "pair-8");
    }
}
