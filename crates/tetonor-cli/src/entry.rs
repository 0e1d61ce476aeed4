use std::str::FromStr;

use tetonor_core::{CellId, Operation, PuzzleState};

/// A player entry given on the command line as `CELL:A+B` or `CELL:A*B`.
///
/// `x` is accepted in place of `*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Entry {
    pub(crate) cell: CellId,
    pub(crate) first: u32,
    pub(crate) second: u32,
    pub(crate) operation: Operation,
}

impl Entry {
    /// Writes the entry into its cell, returning `false` if the cell does not exist.
    pub(crate) fn apply(&self, puzzle: &mut PuzzleState) -> bool {
        let Some(cell) = puzzle.cell_mut(self.cell) else {
            return false;
        };
        cell.set_entry(self.first, self.second, self.operation);
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub(crate) enum ParseEntryError {
    #[display("`{input}` is missing `:` (expected CELL:A+B or CELL:A*B)")]
    MissingColon { input: String },
    #[display("`{input}` has no operator (expected `+`, `*` or `x`)")]
    MissingOperator { input: String },
    #[display("`{value}` is not a non-negative number")]
    InvalidNumber { value: String },
}

impl FromStr for Entry {
    type Err = ParseEntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (cell, expr) = s.split_once(':').ok_or_else(|| ParseEntryError::MissingColon {
            input: s.to_owned(),
        })?;
        let (index, operation) = expr
            .char_indices()
            .find_map(|(index, ch)| match ch {
                '+' => Some((index, Operation::Add)),
                '*' | 'x' | 'X' | '×' => Some((index, Operation::Multiply)),
                _ => None,
            })
            .ok_or_else(|| ParseEntryError::MissingOperator {
                input: s.to_owned(),
            })?;
        let (first, rest) = expr.split_at(index);
        let second = rest
            .chars()
            .next()
            .map_or(rest, |op| &rest[op.len_utf8()..]);
        Ok(Self {
            cell: CellId::new(parse_number(cell)?),
            first: parse_number(first)?,
            second: parse_number(second)?,
            operation,
        })
    }
}

fn parse_number(value: &str) -> Result<u32, ParseEntryError> {
    value
        .trim()
        .parse()
        .map_err(|_| ParseEntryError::InvalidNumber {
            value: value.trim().to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use tetonor_core::{Dimensions, GridCell, NumberPair, PairId};

    use super::*;

    #[test]
    fn test_parse_entries() {
        assert_eq!(
            "3:4+7".parse(),
            Ok(Entry {
                cell: CellId::new(3),
                first: 4,
                second: 7,
                operation: Operation::Add,
            })
        );
        let multiply = Entry {
            cell: CellId::new(12),
            first: 2,
            second: 9,
            operation: Operation::Multiply,
        };
        assert_eq!("12:2*9".parse(), Ok(multiply));
        assert_eq!("12: 2 x 9".parse(), Ok(multiply));
        assert_eq!("12:2×9".parse(), Ok(multiply));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "3-4+7".parse::<Entry>(),
            Err(ParseEntryError::MissingColon { .. })
        ));
        assert!(matches!(
            "3:4-7".parse::<Entry>(),
            Err(ParseEntryError::MissingOperator { .. })
        ));
        assert_eq!(
            "3:4+".parse::<Entry>(),
            Err(ParseEntryError::InvalidNumber {
                value: String::new()
            })
        );
        assert_eq!(
            "c:4+7".parse::<Entry>(),
            Err(ParseEntryError::InvalidNumber {
                value: "c".to_owned()
            })
        );
    }

    #[test]
    fn test_apply_to_unknown_cell() {
        let pair = NumberPair::new(PairId::new(1), 3, 7);
        let mut puzzle = PuzzleState {
            grid: vec![
                GridCell::new(CellId::new(0), 10, Operation::Add, pair.id),
                GridCell::new(CellId::new(1), 21, Operation::Multiply, pair.id),
            ],
            strip: vec![pair],
            dimensions: Dimensions::new(1, 2),
        };
        let entry: Entry = "1:7*3".parse().unwrap();
        assert!(entry.apply(&mut puzzle));
        assert_eq!(puzzle.grid[1].entry(), Some((7, 3, Operation::Multiply)));
        let missing: Entry = "5:7*3".parse().unwrap();
        assert!(!missing.apply(&mut puzzle));
    }
}
