use std::collections::VecDeque;

use chrono::NaiveDate;
use tetonor_random::date;

/// Number of completed dates [`MemoryCompletionStore`] remembers.
pub const COMPLETION_HISTORY_LEN: usize = 30;

/// Records which daily challenges the player has finished.
pub trait CompletionStore {
    /// Returns `true` if the challenge of `date` was completed.
    fn is_completed(&self, date: NaiveDate) -> bool;

    /// Marks the challenge of `date` as completed. Recording twice is a no-op.
    fn record_completion(&mut self, date: NaiveDate);
}

impl<S> CompletionStore for &mut S
where
    S: CompletionStore + ?Sized,
{
    fn is_completed(&self, date: NaiveDate) -> bool {
        (**self).is_completed(date)
    }

    fn record_completion(&mut self, date: NaiveDate) {
        (**self).record_completion(date);
    }
}

/// In-memory store keeping the most recent completions.
///
/// Only the last [`COMPLETION_HISTORY_LEN`] recorded dates are kept; older
/// ones are forgotten in recording order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryCompletionStore {
    completed: VecDeque<NaiveDate>,
}

impl MemoryCompletionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates over the remembered dates, oldest record first.
    pub fn completed_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.completed.iter().copied()
    }
}

impl FromIterator<NaiveDate> for MemoryCompletionStore {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        let mut store = Self::new();
        for date in iter {
            store.record_completion(date);
        }
        store
    }
}

impl CompletionStore for MemoryCompletionStore {
    fn is_completed(&self, date: NaiveDate) -> bool {
        self.completed.contains(&date)
    }

    fn record_completion(&mut self, date: NaiveDate) {
        if self.is_completed(date) {
            return;
        }
        self.completed.push_back(date);
        while self.completed.len() > COMPLETION_HISTORY_LEN {
            self.completed.pop_front();
        }
    }
}

/// Returns `true` if today's challenge is recorded in `store`.
pub fn is_todays_daily_completed<S>(store: &S) -> bool
where
    S: CompletionStore + ?Sized,
{
    store.is_completed(date::today())
}

/// Records today's challenge as completed in `store`.
pub fn record_todays_daily_completion<S>(store: &mut S)
where
    S: CompletionStore + ?Sized,
{
    store.record_completion(date::today());
}
