//! Example demonstrating Tetonor puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` for a difficulty tier
//! - Generate a random puzzle, or the one fixed by a seed
//! - Display the strip, grid, and seed
//! - Sample many puzzles and keep the one with the fewest repeated targets
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick the tier (beginner, intermediate or advanced):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --tier advanced
//! ```
//!
//! Sample puzzles in parallel and keep the one with the fewest target collisions:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --max-tries 10000
//! ```
//!
//! Regenerate a puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```

use std::{collections::HashSet, process};

use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use tetonor_core::{NumberPair, Slot};
use tetonor_generator::{
    GeneratedPuzzle, PuzzleGenerator, PuzzleSeed, Tier, count_target_collisions,
};
use tetonor_validator::validate_puzzle;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TierArg {
    Beginner,
    Intermediate,
    Advanced,
}

impl From<TierArg> for Tier {
    fn from(value: TierArg) -> Self {
        match value {
            TierArg::Beginner => Self::Beginner,
            TierArg::Intermediate => Self::Intermediate,
            TierArg::Advanced => Self::Advanced,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty tier to generate.
    #[arg(long, value_name = "TIER", default_value = "intermediate")]
    tier: TierArg,

    /// Regenerate the puzzle of this 64-digit hex seed.
    #[arg(long, value_name = "HEX", conflicts_with = "max_tries")]
    seed: Option<PuzzleSeed>,

    /// Puzzles to sample, keeping the one with the fewest target collisions.
    #[arg(long, value_name = "COUNT")]
    max_tries: Option<usize>,
}

fn main() {
    let args = Args::parse();
    let generator = PuzzleGenerator::for_tier(args.tier.into());

    if let Some(seed) = args.seed {
        let puzzle = generator.generate_with_seed(seed);
        print_puzzle(&puzzle, None);
        return;
    }

    let Some(max_tries) = args.max_tries else {
        let puzzle = generator.generate();
        print_puzzle(&puzzle, None);
        return;
    };
    if max_tries == 0 {
        eprintln!("--max-tries must be at least 1.");
        process::exit(1);
    }

    let best = (0..max_tries)
        .into_par_iter()
        .map(|_| {
            let puzzle = generator.generate();
            let collisions = target_collisions(&puzzle);
            (puzzle, collisions)
        })
        .min_by_key(|(_, collisions)| *collisions);

    if let Some((puzzle, collisions)) = best {
        print_puzzle(&puzzle, Some((max_tries, collisions)));
        return;
    }

    eprintln!("No puzzle was generated.");
    process::exit(1);
}

fn target_collisions(puzzle: &GeneratedPuzzle) -> usize {
    let mut used = HashSet::new();
    let mut total = 0;
    for pair in &puzzle.puzzle.strip {
        let Some((first, second)) = pair.true_values() else {
            continue;
        };
        total += count_target_collisions(first, second, &used);
        used.insert(first + second);
        used.insert(first * second);
    }
    total
}

fn print_puzzle(generated: &GeneratedPuzzle, selection: Option<(usize, usize)>) {
    let puzzle = &generated.puzzle;

    println!("Seed:");
    println!("  {}", generated.seed);
    println!();

    if let Some((max_tries, collisions)) = selection {
        println!("Selection:");
        println!("  Max tries: {max_tries}");
        println!("  Fewest collisions: {collisions}");
        println!();
    }

    println!("Grid:");
    for row in puzzle.rows() {
        let targets = row
            .iter()
            .map(|cell| format!("{:>5}", cell.target))
            .collect::<String>();
        println!(" {targets}");
    }
    println!();

    println!("Strip:");
    let shown = |pair: &NumberPair, slot| {
        pair.visible(slot)
            .map_or_else(|| "?".to_owned(), |value| value.to_string())
    };
    let strip = puzzle
        .strip
        .iter()
        .map(|pair| format!("{} {}", shown(pair, Slot::First), shown(pair, Slot::Second)))
        .collect::<Vec<_>>();
    println!("  {}", strip.join(" | "));
    println!();

    let mut solved = puzzle.clone();
    let status = match solved.fill_with_solution() {
        Ok(()) if validate_puzzle(&solved).is_correct => "solution validates",
        Ok(()) => "solution does not validate",
        Err(err) => {
            eprintln!("{err}");
            "inconsistent puzzle"
        }
    };
    println!("Check:");
    println!("  {status}");
}
