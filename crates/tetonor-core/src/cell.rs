//! Grid cells and player entries.

use serde::{Deserialize, Serialize};

use crate::{Operation, PairId};

/// Identifier of a [`GridCell`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
#[display("cell-{_0}")]
pub struct CellId(u32);

impl CellId {
    /// Creates a cell id from its numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the numeric value of the id.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

/// A single target cell of the puzzle grid.
///
/// `target`, `operation` and `solution_pair_id` are fixed at construction.
/// The `player_*` fields start empty and are only changed by player input.
/// `solution_pair_id` records which pair the target was built from; it is a
/// reference for hints, not the only accepted answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCell {
    /// Unique identifier.
    pub id: CellId,
    /// The number the player must reach.
    pub target: u32,
    /// The operation this cell was generated to exercise.
    pub operation: Operation,
    /// The pair the target was built from.
    pub solution_pair_id: PairId,
    /// Player's first operand.
    pub player_first: Option<u32>,
    /// Player's second operand.
    pub player_second: Option<u32>,
    /// Player's selected operation.
    pub player_operation: Option<Operation>,
}

impl GridCell {
    /// Creates an empty cell.
    #[must_use]
    pub fn new(id: CellId, target: u32, operation: Operation, solution_pair_id: PairId) -> Self {
        Self {
            id,
            target,
            operation,
            solution_pair_id,
            player_first: None,
            player_second: None,
            player_operation: None,
        }
    }

    /// Returns the complete player entry, or `None` if any part is missing.
    #[must_use]
    pub fn entry(&self) -> Option<(u32, u32, Operation)> {
        Some((
            self.player_first?,
            self.player_second?,
            self.player_operation?,
        ))
    }

    /// Returns `true` if both operands and the operation are set.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.entry().is_some()
    }

    /// Returns `true` if no player field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.player_first.is_none() && self.player_second.is_none() && self.player_operation.is_none()
    }

    /// Sets all player fields at once.
    pub fn set_entry(&mut self, first: u32, second: u32, operation: Operation) {
        self.player_first = Some(first);
        self.player_second = Some(second);
        self.player_operation = Some(operation);
    }

    /// Clears the player fields, keeping the target.
    pub fn clear(&mut self) {
        self.player_first = None;
        self.player_second = None;
        self.player_operation = None;
    }
}
