//! Text rendering of puzzles, check results and archive listings.

use std::fmt;

use serde::{Deserialize, Serialize};
use tetonor_core::{GridCell, NumberPair, PuzzleState, Slot};
use tetonor_daily::{DailyChallengeInfo, DailyPuzzle};
use tetonor_generator::GeneratedPuzzle;
use tetonor_validator::{Hint, PuzzleValidation};

/// JSON shape of a free-play puzzle.
#[derive(Debug, Serialize)]
pub(crate) struct FreePlayOutput<'a> {
    pub(crate) seed: String,
    pub(crate) puzzle: &'a PuzzleState,
}

impl<'a> From<&'a GeneratedPuzzle> for FreePlayOutput<'a> {
    fn from(generated: &'a GeneratedPuzzle) -> Self {
        Self {
            seed: generated.seed.to_string(),
            puzzle: &generated.puzzle,
        }
    }
}

/// JSON shape of a hint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HintOutput<'a> {
    pub(crate) hint: Option<Hint>,
    pub(crate) valid_pairs: Vec<&'a NumberPair>,
}

/// A puzzle read back from disk.
///
/// Accepts a bare puzzle as well as any JSON this tool writes around one
/// (free-play and daily output both carry a `puzzle` field).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum PuzzleFile {
    Bare(PuzzleState),
    Wrapped { puzzle: PuzzleState },
}

impl PuzzleFile {
    pub(crate) fn into_puzzle(self) -> PuzzleState {
        match self {
            Self::Bare(puzzle) | Self::Wrapped { puzzle } => puzzle,
        }
    }
}

/// Grid and strip as the player sees them.
#[derive(Debug)]
pub(crate) struct PuzzleView<'a>(pub(crate) &'a PuzzleState);

impl fmt::Display for PuzzleView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let puzzle = self.0;
        writeln!(f, "Grid:")?;
        for row in puzzle.rows() {
            let cells = row.iter().map(cell_text).collect::<Vec<_>>();
            writeln!(f, "  {}", cells.join("  ").trim_end())?;
        }
        writeln!(f)?;
        writeln!(f, "Strip:")?;
        let strip = puzzle.strip.iter().map(pair_text).collect::<Vec<_>>();
        writeln!(f, "  {}", strip.join(" | "))
    }
}

fn cell_text(cell: &GridCell) -> String {
    let entry = cell
        .entry()
        .map(|(first, second, operation)| {
            format!("[{first}{}{second}]", operation.symbol())
        })
        .unwrap_or_default();
    format!("{:>2}:{:>5} {entry:<9}", cell.id.value(), cell.target)
}

fn pair_text(pair: &NumberPair) -> String {
    let shown = |slot| {
        pair.visible(slot)
            .map_or_else(|| "?".to_owned(), |value| value.to_string())
    };
    format!("{} {}", shown(Slot::First), shown(Slot::Second))
}

/// Header line of a daily puzzle.
#[derive(Debug)]
pub(crate) struct DailyHeader<'a> {
    pub(crate) daily: &'a DailyPuzzle,
    pub(crate) is_completed: bool,
}

impl fmt::Display for DailyHeader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let daily = self.daily;
        write!(
            f,
            "Daily #{} ({}, {})",
            daily.number,
            daily.date.format("%a, %b %-d, %Y"),
            daily.difficulty
        )?;
        if self.is_completed {
            write!(f, " [completed]")?;
        }
        Ok(())
    }
}

/// Per-cell results, pair usage errors and the overall verdict.
#[derive(Debug)]
pub(crate) struct ValidationView<'a> {
    pub(crate) puzzle: &'a PuzzleState,
    pub(crate) validation: &'a PuzzleValidation,
}

impl fmt::Display for ValidationView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { puzzle, validation } = self;
        for (cell, result) in puzzle.grid.iter().zip(&validation.cell_validations) {
            let entry = cell
                .entry()
                .map(|(first, second, operation)| {
                    format!("{first} {} {second}", operation.symbol())
                })
                .unwrap_or_else(|| "-".to_owned());
            writeln!(
                f,
                "{:>8} {:>5}  {entry:<10} {}",
                cell.id.to_string(),
                cell.target,
                result.message
            )?;
        }
        if !validation.errors.is_empty() {
            writeln!(f)?;
            for error in &validation.errors {
                writeln!(f, "{error}")?;
            }
        }
        writeln!(f)?;
        let verdict = if validation.is_correct {
            "Solved!"
        } else if validation.is_complete {
            "Every cell reaches its target, but the pairs are not used correctly."
        } else {
            "Not solved yet."
        };
        writeln!(f, "{verdict}")
    }
}

/// One line per daily challenge, newest first.
#[derive(Debug)]
pub(crate) struct ArchiveView<'a>(pub(crate) &'a [DailyChallengeInfo]);

impl fmt::Display for ArchiveView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for info in self.0 {
            let mark = if info.is_completed { 'x' } else { ' ' };
            let today = if info.is_today { "  (today)" } else { "" };
            writeln!(
                f,
                "[{mark}] #{:<4} {:<18} {:<9}{today}",
                info.puzzle_number, info.display_date, info.difficulty
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tetonor_core::{CellId, Dimensions, Operation, PairId};
    use tetonor_daily::MemoryCompletionStore;
    use tetonor_validator::validate_puzzle;

    use super::*;

    fn small_puzzle() -> PuzzleState {
        let mut pair = NumberPair::new(PairId::new(1), 3, 7);
        pair.hide(Slot::First);
        PuzzleState {
            grid: vec![
                GridCell::new(CellId::new(0), 10, Operation::Add, pair.id),
                GridCell::new(CellId::new(1), 21, Operation::Multiply, pair.id),
            ],
            strip: vec![pair],
            dimensions: Dimensions::new(1, 2),
        }
    }

    #[test]
    fn test_puzzle_view_hides_blanks() {
        let mut puzzle = small_puzzle();
        puzzle.grid[0].set_entry(3, 7, Operation::Add);
        let text = PuzzleView(&puzzle).to_string();
        assert!(text.contains(" 0:   10 [3+7]"));
        assert!(text.contains(" 1:   21"));
        assert!(text.ends_with("Strip:\n  ? 7\n"));
    }

    #[test]
    fn test_validation_view_verdicts() {
        let mut puzzle = small_puzzle();
        let text = ValidationView {
            puzzle: &puzzle,
            validation: &validate_puzzle(&puzzle),
        }
        .to_string();
        assert!(text.contains("Cell incomplete"));
        assert!(text.contains("Pair (3, 7) not used correctly"));
        assert!(text.ends_with("Not solved yet.\n"));

        puzzle.fill_with_solution().unwrap();
        let text = ValidationView {
            puzzle: &puzzle,
            validation: &validate_puzzle(&puzzle),
        }
        .to_string();
        assert!(text.contains("3 × 7"));
        assert!(text.ends_with("Solved!\n"));
    }

    #[test]
    fn test_archive_view() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        let store = [today].into_iter().collect::<MemoryCompletionStore>();
        let list = tetonor_daily::daily_challenge_list(today, &store);
        let text = ArchiveView(&list).to_string();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("[x] #2"));
        assert!(lines[0].ends_with("(today)"));
        assert!(lines[1].starts_with("[ ] #1"));
    }

    #[test]
    fn test_puzzle_file_accepts_wrapped_and_bare() {
        let puzzle = small_puzzle();
        let bare = serde_json::to_string(&puzzle).unwrap();
        let parsed: PuzzleFile = serde_json::from_str(&bare).unwrap();
        assert_eq!(parsed.into_puzzle(), puzzle);

        let generated = serde_json::to_string(&FreePlayOutput {
            seed: "00".to_owned(),
            puzzle: &puzzle,
        })
        .unwrap();
        let parsed: PuzzleFile = serde_json::from_str(&generated).unwrap();
        assert_eq!(parsed.into_puzzle(), puzzle);
    }
}
