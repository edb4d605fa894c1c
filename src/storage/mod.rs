//! Storage layer for moni
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The balance and the transaction log live in two independent
//! files. Each file is written atomically, but there is no transaction
//! spanning both, so a crash between the two writes can leave a balance
//! change without its log entry.

pub mod balance;
pub mod file_io;
pub mod logs;

pub use balance::BalanceStore;
pub use file_io::{read_json_or_default, write_json_atomic};
pub use logs::TransactionLog;

use crate::config::paths::MoniPaths;
use crate::error::MoniError;

/// Main storage coordinator that provides access to both stores
pub struct Storage {
    pub balance: BalanceStore,
    pub logs: TransactionLog,
}

impl Storage {
    /// Create a new Storage instance rooted at the given paths
    ///
    /// Creates the data directory on first use.
    pub fn new(paths: &MoniPaths) -> Result<Self, MoniError> {
        paths.ensure_directories()?;

        Ok(Self {
            balance: BalanceStore::new(paths.balance_file()),
            logs: TransactionLog::new(paths.logs_file()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_storage_starts_empty() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("moni");
        let paths = MoniPaths::with_data_dir(data_dir.clone());

        let storage = Storage::new(&paths).unwrap();

        assert!(data_dir.exists());
        assert_eq!(storage.balance.load(), 0.0);
        assert!(storage.logs.read_all().is_empty());
    }
}
