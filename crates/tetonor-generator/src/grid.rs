//! Building the target grid from a set of pairs.

use std::ops::RangeInclusive;

use tetonor_core::{CellId, Dimensions, GridCell, NumberPair, Operation, PuzzleState};
use tetonor_random::{RandomSource, seeded_random_int, shuffle_in_place};

use crate::{BlankLayout, GeneratorError, apply_blanks};

/// Checks that a `rows x cols` grid can hold add/multiply cell pairs.
///
/// # Errors
///
/// Returns [`GeneratorError::GridTooLarge`], [`GeneratorError::EmptyGrid`] or
/// [`GeneratorError::OddCellCount`].
pub fn check_dimensions(rows: usize, cols: usize) -> Result<Dimensions, GeneratorError> {
    let dimensions = Dimensions::new(rows, cols);
    match dimensions.cell_count() {
        None => Err(GeneratorError::GridTooLarge { rows, cols }),
        Some(0) => Err(GeneratorError::EmptyGrid),
        Some(n) if n % 2 != 0 => Err(GeneratorError::OddCellCount { rows, cols }),
        Some(_) => Ok(dimensions),
    }
}

pub(crate) fn pair_capacity(dimensions: Dimensions) -> usize {
    match dimensions.cell_count() {
        Some(cells) => cells / 2,
        None => unreachable!("dimensions were checked: {dimensions:?}"),
    }
}

/// Emits one `add` and one `multiply` cell for each of the first
/// `rows * cols / 2` pairs and shuffles them into display order.
///
/// Cell ids are assigned `0..` after shuffling, so they carry no hint of
/// which cells share a pair.
///
/// # Errors
///
/// Fails before drawing any randomness if the grid is empty or has an odd
/// number of cells, if fewer than `rows * cols / 2` pairs are supplied, or if
/// a pair's targets cannot be computed.
///
/// # Examples
///
/// ```
/// use tetonor_core::{NumberPair, PairId};
/// use tetonor_generator::{GeneratorError, assign_pairs_to_grid};
/// use tetonor_random::Mulberry32;
///
/// let pairs = [NumberPair::new(PairId::new(1), 3, 7)];
/// let cells = assign_pairs_to_grid(&pairs, 1, 2, &mut Mulberry32::new(0))?;
/// let mut targets = cells.iter().map(|c| c.target).collect::<Vec<_>>();
/// targets.sort_unstable();
/// assert_eq!(targets, [10, 21]);
///
/// assert!(assign_pairs_to_grid(&pairs, 1, 3, &mut Mulberry32::new(0)).is_err());
/// # Ok::<(), GeneratorError>(())
/// ```
pub fn assign_pairs_to_grid<R>(
    pairs: &[NumberPair],
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> Result<Vec<GridCell>, GeneratorError>
where
    R: RandomSource + ?Sized,
{
    let dimensions = check_dimensions(rows, cols)?;
    let required = pair_capacity(dimensions);
    let pairs = pairs
        .get(..required)
        .ok_or(GeneratorError::NotEnoughPairs {
            required,
            available: pairs.len(),
        })?;

    let mut cells = Vec::with_capacity(required * 2);
    for pair in pairs {
        let unresolvable = || GeneratorError::UnresolvablePair { pair: pair.id };
        let (first, second) = pair.true_values().ok_or_else(unresolvable)?;
        for operation in Operation::ALL {
            let target = operation.apply(first, second).ok_or_else(unresolvable)?;
            cells.push(GridCell::new(CellId::new(0), target, operation, pair.id));
        }
    }

    shuffle_in_place(&mut cells, rng);
    for (id, cell) in (0..).zip(&mut cells) {
        cell.id = CellId::new(id);
    }
    Ok(cells)
}

/// Assembles a puzzle from sorted pairs: grid first, then blanks.
///
/// Only the first `rows * cols / 2` pairs are placed on the strip. The number
/// of hidden slots is drawn from `blank_slots` after the grid is shuffled; a
/// single-value range draws nothing.
///
/// # Errors
///
/// Propagates the errors of [`assign_pairs_to_grid`].
pub fn build_puzzle<R>(
    mut pairs: Vec<NumberPair>,
    dimensions: Dimensions,
    blank_slots: &RangeInclusive<usize>,
    layout: BlankLayout,
    rng: &mut R,
) -> Result<PuzzleState, GeneratorError>
where
    R: RandomSource + ?Sized,
{
    let grid = assign_pairs_to_grid(&pairs, dimensions.rows, dimensions.cols, rng)?;
    pairs.truncate(grid.len() / 2);
    let blank_count = draw_blank_count(blank_slots, rng);
    let strip = apply_blanks(pairs, blank_count, layout, rng);
    Ok(PuzzleState {
        grid,
        strip,
        dimensions,
    })
}

fn draw_blank_count<R>(range: &RangeInclusive<usize>, rng: &mut R) -> usize
where
    R: RandomSource + ?Sized,
{
    let (start, end) = (*range.start(), *range.end());
    if start >= end {
        return start;
    }
    let span = u32::try_from(end - start).unwrap_or(u32::MAX);
    start + seeded_random_int(0, span, rng) as usize
}
