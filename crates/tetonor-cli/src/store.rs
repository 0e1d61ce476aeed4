use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use tetonor_daily::{CompletionStore, MemoryCompletionStore};

use crate::error::CliError;

/// Completion store persisted as a JSON array of `YYYY-MM-DD` strings.
#[derive(Debug)]
pub(crate) struct FileCompletionStore {
    path: PathBuf,
    inner: MemoryCompletionStore,
}

impl FileCompletionStore {
    /// Loads the store at `path`; a missing file is an empty store.
    pub(crate) fn load(path: &Path) -> Result<Self, CliError> {
        let inner = match fs::read_to_string(path) {
            Ok(text) => parse_dates(&text)
                .map_err(|source| CliError::Json {
                    path: path.to_owned(),
                    source,
                })?
                .into_iter()
                .collect(),
            Err(err) if err.kind() == io::ErrorKind::NotFound => MemoryCompletionStore::new(),
            Err(source) => {
                return Err(CliError::Io {
                    path: path.to_owned(),
                    source,
                });
            }
        };
        Ok(Self {
            path: path.to_owned(),
            inner,
        })
    }

    pub(crate) fn save(&self) -> Result<(), CliError> {
        let text = format_dates(&self.inner)?;
        fs::write(&self.path, text).map_err(|source| CliError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl CompletionStore for FileCompletionStore {
    fn is_completed(&self, date: NaiveDate) -> bool {
        self.inner.is_completed(date)
    }

    fn record_completion(&mut self, date: NaiveDate) {
        self.inner.record_completion(date);
    }
}

fn parse_dates(text: &str) -> Result<Vec<NaiveDate>, serde_json::Error> {
    serde_json::from_str(text)
}

fn format_dates(store: &MemoryCompletionStore) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&store.completed_dates().collect::<Vec<_>>())
}
