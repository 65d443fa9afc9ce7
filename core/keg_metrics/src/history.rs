//! # History
//!
//! Bounded, newest-first log of calculation results.
//!
//! | Operation  | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `record`   | Prepend; evict from the tail beyond [`HISTORY_CAPACITY`] |
//! | `latest`   | Head of the log, if any                                 |
//! | `all`      | Snapshot of every retained result, newest first         |
//!
//! Entries are never updated, searched or deduplicated. Each `record` call
//! gets its own auto-incremented entry id, so two structurally equal results
//! are still two entries.

use std::collections::VecDeque;

use serde::Serialize;

use crate::types::CalculationResult;

/// Number of results retained.
pub const HISTORY_CAPACITY: usize = 10;

/// One recorded result together with its list identity.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub id: u64,
    pub result: CalculationResult,
}

#[derive(Debug, Default)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    next_id: u64,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY + 1),
            next_id: 0,
        }
    }

    /// Prepend `result` and drop the oldest entries beyond capacity.
    /// Returns the id assigned to the new entry.
    pub fn record(&mut self, result: CalculationResult) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push_front(HistoryEntry { id, result });
        self.entries.truncate(HISTORY_CAPACITY);
        id
    }

    pub fn latest(&self) -> Option<&CalculationResult> {
        self.entries.front().map(|e| &e.result)
    }

    /// Newest-first copy of every retained result.
    pub fn all(&self) -> Vec<CalculationResult> {
        self.entries.iter().map(|e| e.result.clone()).collect()
    }

    /// Newest-first view of the retained entries with their ids.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        HISTORY_CAPACITY
    }
}
