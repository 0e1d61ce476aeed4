use std::{io, path::PathBuf};

use chrono::NaiveDate;
use tetonor_core::{CellId, ConsistencyError};
use tetonor_generator::GeneratorError;

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum CliError {
    #[display("{}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[display("{}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[display("{}: inconsistent puzzle: {source}", path.display())]
    Puzzle {
        path: PathBuf,
        source: ConsistencyError,
    },
    #[display("failed to write JSON: {_0}")]
    Output(#[from] serde_json::Error),
    #[display("invalid puzzle settings: {_0}")]
    Generator(#[from] GeneratorError),
    #[display("no daily challenge for {date} (valid from launch until today)")]
    InvalidDailyDate { date: NaiveDate },
    #[display("{cell} is not part of the puzzle")]
    UnknownCell { cell: CellId },
}
