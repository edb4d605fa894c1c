//! Transaction log persistence
//!
//! Keeps the append-only history of deposits and withdrawals. The file holds
//! one JSON array in append order; each append loads the array, pushes the
//! new record, and rewrites the whole file. The log is never compacted or
//! reordered, so append order doubles as chronological order for a
//! single-threaded tool.

use std::path::PathBuf;

use super::file_io::{read_json_or_default, write_json_atomic};
use crate::error::MoniResult;
use crate::models::{Direction, Transaction};

/// Append-only store for transaction records
pub struct TransactionLog {
    path: PathBuf,
}

impl TransactionLog {
    /// Create a log backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Append one record stamped with the current local time
    ///
    /// An absent or damaged log file is treated as empty, so the new record
    /// becomes the first entry of a fresh array. A failed write leaves the
    /// previous file contents in place; the caller decides how to surface
    /// the error (the balance may already have been saved by then).
    pub fn append(
        &self,
        direction: Direction,
        amount: f64,
        reason: &str,
        category: &str,
    ) -> MoniResult<()> {
        self.append_record(Transaction::new(direction, amount, reason, category))
    }

    /// Append a pre-built record, keeping its timestamp
    pub fn append_record(&self, transaction: Transaction) -> MoniResult<()> {
        let mut entries = self.read_all();
        entries.push(transaction);
        write_json_atomic(&self.path, &entries)
    }

    /// All recorded transactions in append order
    ///
    /// Returns an empty list when the file is absent or malformed (silent
    /// recovery; the display layer prints a notice for an empty history).
    pub fn read_all(&self) -> Vec<Transaction> {
        read_json_or_default(&self.path)
    }
}
