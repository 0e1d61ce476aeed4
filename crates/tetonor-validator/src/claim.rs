//! Assigning filled cells to strip pairs.
//!
//! Each strip pair can back one addition cell and one multiplication cell.
//! A claim strategy decides which pair, if any, each complete cell consumes.

use serde::Serialize;
use tetonor_core::{GridCell, NumberPair, Operation, PairId};

/// How cells claim pair-operation slots during whole-puzzle validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum ClaimStrategy {
    /// Cells claim in grid order; the first matching unclaimed pair wins.
    ///
    /// A cell claims a pair even when its operation misses the target.
    #[default]
    Greedy,
    /// Cells whose entry reaches the target are matched to pairs so that as
    /// many of them as possible get one. Cells with a wrong result claim
    /// nothing.
    MaximumMatching,
}

/// Which operations of a pair have been claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairUsage {
    /// The pair.
    pub pair_id: PairId,
    /// An addition cell claimed this pair.
    pub addition_used: bool,
    /// A multiplication cell claimed this pair.
    pub multiplication_used: bool,
}

impl PairUsage {
    /// Creates an unclaimed usage record.
    #[must_use]
    pub fn new(pair_id: PairId) -> Self {
        Self {
            pair_id,
            addition_used: false,
            multiplication_used: false,
        }
    }

    /// Returns `true` if `operation` is already claimed.
    #[must_use]
    pub fn is_used(&self, operation: Operation) -> bool {
        match operation {
            Operation::Add => self.addition_used,
            Operation::Multiply => self.multiplication_used,
        }
    }

    /// Marks `operation` as claimed.
    pub fn mark_used(&mut self, operation: Operation) {
        match operation {
            Operation::Add => self.addition_used = true,
            Operation::Multiply => self.multiplication_used = true,
        }
    }

    /// Returns `true` if both operations are claimed.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.addition_used && self.multiplication_used
    }
}

/// Returns the strip index of the first pair matching `{first, second}` that
/// is not yet claimed for `operation`.
///
/// `usage` is indexed like `strip`.
#[must_use]
pub fn find_available_pair(
    strip: &[NumberPair],
    first: u32,
    second: u32,
    operation: Operation,
    usage: &[PairUsage],
) -> Option<usize> {
    strip
        .iter()
        .zip(usage)
        .position(|(pair, usage)| pair.matches(first, second) && !usage.is_used(operation))
}

/// Claims pairs for `grid` and returns each cell's claimed strip index,
/// together with the final usage table.
pub(crate) fn claim_pairs(
    grid: &[GridCell],
    strip: &[NumberPair],
    strategy: ClaimStrategy,
) -> (Vec<Option<usize>>, Vec<PairUsage>) {
    let mut usage = strip
        .iter()
        .map(|pair| PairUsage::new(pair.id))
        .collect::<Vec<_>>();
    let claims = match strategy {
        ClaimStrategy::Greedy => claim_greedy(grid, strip, &mut usage),
        ClaimStrategy::MaximumMatching => claim_maximum(grid, strip, &mut usage),
    };
    (claims, usage)
}

fn claim_greedy(
    grid: &[GridCell],
    strip: &[NumberPair],
    usage: &mut [PairUsage],
) -> Vec<Option<usize>> {
    grid.iter()
        .map(|cell| {
            let (first, second, operation) = cell.entry()?;
            let index = find_available_pair(strip, first, second, operation, usage)?;
            usage[index].mark_used(operation);
            log::trace!("{} claims {} for {operation}", cell.id, strip[index].id);
            Some(index)
        })
        .collect()
}

fn claim_maximum(
    grid: &[GridCell],
    strip: &[NumberPair],
    usage: &mut [PairUsage],
) -> Vec<Option<usize>> {
    let mut claims = vec![None; grid.len()];
    for operation in Operation::ALL {
        let candidates = grid
            .iter()
            .map(|cell| match cell.entry() {
                Some((first, second, op)) if op == operation && reaches_target(cell) => strip
                    .iter()
                    .enumerate()
                    .filter(|(_, pair)| pair.matches(first, second))
                    .map(|(index, _)| index)
                    .collect(),
                _ => vec![],
            })
            .collect::<Vec<Vec<usize>>>();

        let mut owner = vec![None; strip.len()];
        for cell in 0..grid.len() {
            let mut visited = vec![false; strip.len()];
            augment(cell, &candidates, &mut owner, &mut visited);
        }

        for (index, owner) in owner.into_iter().enumerate() {
            if let Some(cell) = owner {
                claims[cell] = Some(index);
                usage[index].mark_used(operation);
                log::trace!("{} claims {} for {operation}", grid[cell].id, strip[index].id);
            }
        }
    }
    claims
}

/// Kuhn's augmenting-path step: tries to give `cell` a pair, displacing
/// earlier owners onto alternatives where possible.
fn augment(
    cell: usize,
    candidates: &[Vec<usize>],
    owner: &mut [Option<usize>],
    visited: &mut [bool],
) -> bool {
    for &index in &candidates[cell] {
        if visited[index] {
            continue;
        }
        visited[index] = true;
        let free = match owner[index] {
            None => true,
            Some(other) => augment(other, candidates, owner, visited),
        };
        if free {
            owner[index] = Some(cell);
            return true;
        }
    }
    false
}

fn reaches_target(cell: &GridCell) -> bool {
    cell.entry().is_some_and(|(first, second, operation)| {
        crate::is_input_valid(first, second, cell.target, operation)
    })
}
