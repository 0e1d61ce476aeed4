//! Puzzle generation parameters.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Dimensions;

/// Difficulty tag of a puzzle.
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
    derive_more::IsVariant,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Easy puzzles.
    #[display("easy")]
    Easy,
    /// Moderate puzzles.
    #[display("moderate")]
    Moderate,
    /// Difficult puzzles.
    #[display("difficult")]
    Difficult,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Moderate, Self::Difficult];
}

/// Error returned when parsing an unknown difficulty name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown difficulty `{name}` (expected easy, moderate or difficult)")]
pub struct ParseDifficultyError {
    name: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseDifficultyError { name: s.to_owned() })
    }
}

/// Parameters for configurable puzzle generation.
///
/// `blank_pairs` counts individual value slots to hide (each pair has two).
/// `difficulty` selects how those blanks are distributed over the strip.
///
/// # Examples
///
/// ```
/// use tetonor_core::{Difficulty, PuzzleConfig};
///
/// let config = PuzzleConfig::preset(Difficulty::Moderate);
/// assert_eq!(config.pair_count(), Some(8));
/// assert_eq!((config.min_value, config.max_value), (2, 20));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleConfig {
    /// Number of grid rows.
    pub rows: usize,
    /// Number of grid columns.
    pub cols: usize,
    /// Smallest value a pair may contain.
    pub min_value: u32,
    /// Largest value a pair may contain.
    pub max_value: u32,
    /// Number of strip value slots to hide.
    pub blank_pairs: usize,
    /// Difficulty tag, which selects the blank layout.
    pub difficulty: Difficulty,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 4,
            min_value: 2,
            max_value: 9,
            blank_pairs: 1,
            difficulty: Difficulty::Easy,
        }
    }
}

impl PuzzleConfig {
    /// Returns the 4×4 preset for a difficulty.
    ///
    /// Presets differ only in their value range and hide nothing.
    #[must_use]
    pub fn preset(difficulty: Difficulty) -> Self {
        let max_value = match difficulty {
            Difficulty::Easy => 10,
            Difficulty::Moderate => 20,
            Difficulty::Difficult => 50,
        };
        Self {
            rows: 4,
            cols: 4,
            min_value: 2,
            max_value,
            blank_pairs: 0,
            difficulty,
        }
    }

    /// Returns the grid dimensions.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.rows, self.cols)
    }

    /// Returns the number of pairs needed: half the cell count, rounded down.
    ///
    /// Returns `None` if `rows * cols` overflows.
    #[must_use]
    pub fn pair_count(&self) -> Option<usize> {
        self.dimensions().cell_count().map(|cells| cells / 2)
    }
}
