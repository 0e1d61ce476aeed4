//! Command-line front end for Tetonor puzzles.
//!
//! Generates free-play and daily puzzles, checks filled-in puzzles, gives
//! hints and lists the daily archive. Every command prints text by default
//! and JSON with `--json`; JSON puzzle output can be fed back into `check` and
//! `hint`.

use std::{
    fs, io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tetonor_core::{CellId, Difficulty, PuzzleConfig, PuzzleState};
use tetonor_daily::{
    CompletionStore as _, DailyPuzzle, MemoryCompletionStore, all_daily_challenges,
    daily_challenge_list, date_from_puzzle_number, is_valid_daily_date,
};
use tetonor_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed, Tier, create_fixed_puzzle};
use tetonor_random::date;
use tetonor_validator::{
    ClaimStrategy, get_hint_for_cell, get_valid_pairs_for_cell, validate_puzzle_with,
};

use crate::{
    entry::Entry,
    error::CliError,
    render::{
        ArchiveView, DailyHeader, FreePlayOutput, HintOutput, PuzzleFile, PuzzleView,
        ValidationView,
    },
    store::FileCompletionStore,
};

mod entry;
mod error;
mod render;
mod store;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a 4x4 free-play puzzle for a difficulty tier.
    New {
        /// Difficulty tier.
        #[arg(long, value_name = "TIER", default_value = "intermediate")]
        tier: TierArg,
        /// Regenerate the puzzle of this 64-digit hex seed.
        #[arg(long, value_name = "HEX")]
        seed: Option<PuzzleSeed>,
    },
    /// Generate a puzzle from explicit settings.
    Custom(CustomArgs),
    /// Print the built-in demonstration puzzle.
    Fixed,
    /// Print a daily challenge (today's by default).
    Daily {
        /// Challenge date as YYYY-MM-DD.
        #[arg(long, value_name = "DATE", value_parser = date::parse_date_string)]
        date: Option<NaiveDate>,
        /// Challenge number; #1 is the launch date.
        #[arg(long, value_name = "N", conflicts_with = "date")]
        number: Option<i64>,
        /// JSON file recording completed challenges.
        #[arg(long, value_name = "PATH")]
        store: Option<PathBuf>,
        /// Mark the challenge as completed in the store.
        #[arg(long, requires = "store")]
        complete: bool,
    },
    /// List past daily challenges, newest first.
    Archive {
        /// List every challenge since launch instead of the last week.
        #[arg(long)]
        all: bool,
        /// JSON file recording completed challenges.
        #[arg(long, value_name = "PATH")]
        store: Option<PathBuf>,
    },
    /// Check a puzzle file, optionally after filling in entries.
    Check {
        /// Puzzle JSON written by this tool.
        file: PathBuf,
        /// Entry to fill in, as CELL:A+B or CELL:A*B. May be repeated.
        #[arg(long = "entry", value_name = "ENTRY")]
        entries: Vec<Entry>,
        /// Fill every cell with its intended solution first.
        #[arg(long, conflicts_with = "entries")]
        solve: bool,
        /// How cells claim strip pairs.
        #[arg(long, value_name = "STRATEGY", default_value = "greedy")]
        strategy: StrategyArg,
    },
    /// Show a hint for one cell of a puzzle file.
    Hint {
        /// Puzzle JSON written by this tool.
        file: PathBuf,
        /// Cell number as shown in the grid.
        cell: u32,
    },
}

#[derive(Debug, clap::Args)]
struct CustomArgs {
    /// Start from the 4x4 preset of this difficulty.
    #[arg(long, value_name = "DIFFICULTY")]
    preset: Option<Difficulty>,
    /// Grid rows.
    #[arg(long)]
    rows: Option<usize>,
    /// Grid columns.
    #[arg(long)]
    cols: Option<usize>,
    /// Smallest pair value.
    #[arg(long, value_name = "N")]
    min: Option<u32>,
    /// Largest pair value.
    #[arg(long, value_name = "N")]
    max: Option<u32>,
    /// Number of strip values to hide.
    #[arg(long, value_name = "N")]
    blanks: Option<usize>,
    /// Difficulty, which decides how hidden values are spread.
    #[arg(long, value_name = "DIFFICULTY")]
    difficulty: Option<Difficulty>,
    /// Regenerate the puzzle of this 64-digit hex seed.
    #[arg(long, value_name = "HEX")]
    seed: Option<PuzzleSeed>,
}

impl CustomArgs {
    fn config(&self) -> PuzzleConfig {
        let mut config = self
            .preset
            .map_or_else(PuzzleConfig::default, PuzzleConfig::preset);
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(min) = self.min {
            config.min_value = min;
        }
        if let Some(max) = self.max {
            config.max_value = max;
        }
        if let Some(blanks) = self.blanks {
            config.blank_pairs = blanks;
        }
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
        config
    }
}

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

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// First matching unclaimed pair in grid order.
    Greedy,
    /// Maximum matching among cells that reach their target.
    Maximum,
}

impl From<StrategyArg> for ClaimStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Greedy => Self::Greedy,
            StrategyArg::Maximum => Self::MaximumMatching,
        }
    }
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let json = cli.json;
    match cli.command {
        Command::New { tier, seed } => {
            let generator = PuzzleGenerator::for_tier(tier.into());
            print_generated(&generate(&generator, seed), json)
        }
        Command::Custom(args) => {
            let generator = PuzzleGenerator::new(&args.config())?;
            print_generated(&generate(&generator, args.seed), json)
        }
        Command::Fixed => {
            let puzzle = create_fixed_puzzle();
            if json {
                return print_json(&puzzle);
            }
            print!("{}", PuzzleView(&puzzle));
            Ok(())
        }
        Command::Daily {
            date,
            number,
            store,
            complete,
        } => run_daily(date, number, store.as_deref(), complete, json),
        Command::Archive { all, store } => {
            let today = date::today();
            let list = match store.as_deref().map(FileCompletionStore::load).transpose()? {
                Some(store) if all => all_daily_challenges(today, &store),
                Some(store) => daily_challenge_list(today, &store),
                None if all => all_daily_challenges(today, &MemoryCompletionStore::new()),
                None => daily_challenge_list(today, &MemoryCompletionStore::new()),
            };
            if json {
                return print_json(&list);
            }
            print!("{}", ArchiveView(&list));
            Ok(())
        }
        Command::Check {
            file,
            entries,
            solve,
            strategy,
        } => run_check(&file, &entries, solve, strategy.into(), json),
        Command::Hint { file, cell } => run_hint(&file, CellId::new(cell), json),
    }
}

fn run_check(
    file: &Path,
    entries: &[Entry],
    solve: bool,
    strategy: ClaimStrategy,
    json: bool,
) -> Result<(), CliError> {
    let mut puzzle = load_puzzle(file)?;
    if solve {
        puzzle
            .fill_with_solution()
            .map_err(|source| CliError::Puzzle {
                path: file.to_owned(),
                source,
            })?;
    }
    for entry in entries {
        if !entry.apply(&mut puzzle) {
            return Err(CliError::UnknownCell { cell: entry.cell });
        }
    }
    let validation = validate_puzzle_with(&puzzle, strategy);
    log::debug!(
        "checked {} cells, {} pair errors",
        validation.cell_validations.len(),
        validation.errors.len()
    );
    if json {
        return print_json(&validation);
    }
    print!(
        "{}",
        ValidationView {
            puzzle: &puzzle,
            validation: &validation,
        }
    );
    Ok(())
}

fn run_hint(file: &Path, cell_id: CellId, json: bool) -> Result<(), CliError> {
    let puzzle = load_puzzle(file)?;
    let cell = puzzle
        .cell(cell_id)
        .ok_or(CliError::UnknownCell { cell: cell_id })?;
    let output = HintOutput {
        hint: get_hint_for_cell(cell, &puzzle),
        valid_pairs: get_valid_pairs_for_cell(cell, &puzzle.strip),
    };
    if json {
        return print_json(&output);
    }
    match output.hint {
        Some(hint) => println!("{hint}"),
        None => println!("No hint available for {cell_id}."),
    }
    let pairs = output
        .valid_pairs
        .iter()
        .filter_map(|pair| pair.visible_values())
        .map(|(first, second)| format!("({first}, {second})"))
        .collect::<Vec<_>>();
    if !pairs.is_empty() {
        println!("Visible pairs that fit: {}", pairs.join(", "));
    }
    Ok(())
}

fn generate(generator: &PuzzleGenerator, seed: Option<PuzzleSeed>) -> GeneratedPuzzle {
    match seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    }
}

fn print_generated(generated: &GeneratedPuzzle, json: bool) -> Result<(), CliError> {
    if json {
        return print_json(&FreePlayOutput::from(generated));
    }
    println!("Seed: {}", generated.seed);
    println!();
    print!("{}", PuzzleView(&generated.puzzle));
    Ok(())
}

fn run_daily(
    date: Option<NaiveDate>,
    number: Option<i64>,
    store: Option<&Path>,
    complete: bool,
    json: bool,
) -> Result<(), CliError> {
    let today = date::today();
    let date = date
        .or_else(|| number.map(date_from_puzzle_number))
        .unwrap_or(today);
    if !is_valid_daily_date(date, today) {
        return Err(CliError::InvalidDailyDate { date });
    }

    let mut store = store.map(FileCompletionStore::load).transpose()?;
    if complete && let Some(store) = &mut store {
        store.record_completion(date);
        store.save()?;
        log::info!("recorded completion of {date}");
    }
    let is_completed = store.as_ref().is_some_and(|store| store.is_completed(date));

    let daily = DailyPuzzle::for_date(date);
    if json {
        return print_json(&DailyOutput {
            daily: &daily,
            is_completed,
        });
    }
    println!(
        "{}",
        DailyHeader {
            daily: &daily,
            is_completed,
        }
    );
    println!();
    print!("{}", PuzzleView(&daily.puzzle));
    Ok(())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DailyOutput<'a> {
    #[serde(flatten)]
    daily: &'a DailyPuzzle,
    is_completed: bool,
}

fn load_puzzle(path: &Path) -> Result<PuzzleState, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_owned(),
        source,
    })?;
    let puzzle = serde_json::from_str::<PuzzleFile>(&text)
        .map_err(|source| CliError::Json {
            path: path.to_owned(),
            source,
        })?
        .into_puzzle();
    puzzle
        .check_consistency()
        .map_err(|source| CliError::Puzzle {
            path: path.to_owned(),
            source,
        })?;
    Ok(puzzle)
}

fn print_json<T>(value: &T) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
{
    let stdout = io::stdout().lock();
    serde_json::to_writer_pretty(stdout, value)?;
    println!();
    Ok(())
}
