//! Balance persistence
//!
//! The running balance is the single piece of mutable state. It lives in its
//! own file as `{"balance": <number>}` and is fully read or fully rewritten
//! per operation; no handle is kept open between operations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::file_io::{read_json_or_default, write_json_atomic};
use crate::error::MoniResult;

/// On-disk shape of the balance file
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
struct BalanceFile {
    balance: f64,
}

/// Reads and writes the persisted running balance
pub struct BalanceStore {
    path: PathBuf,
}

impl BalanceStore {
    /// Create a store backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the persisted balance
    ///
    /// Returns 0 when the file is absent, malformed, or missing the balance
    /// key, so a fresh or damaged install starts from zero instead of
    /// failing.
    pub fn load(&self) -> f64 {
        read_json_or_default::<BalanceFile, _>(&self.path).balance
    }

    /// Overwrite the persisted balance with the given value
    pub fn save(&self, value: f64) -> MoniResult<()> {
        write_json_atomic(&self.path, &BalanceFile { balance: value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, BalanceStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = BalanceStore::new(temp_dir.path().join("balance.json"));
        (temp_dir, store)
    }

    #[test]
    fn test_load_without_file_returns_zero() {
        let (_temp_dir, store) = create_test_store();
        assert_eq!(store.load(), 0.0);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let (_temp_dir, store) = create_test_store();

        store.save(100.0).unwrap();
        assert_eq!(store.load(), 100.0);
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let (_temp_dir, store) = create_test_store();

        store.save(100.0).unwrap();
        store.save(42.5).unwrap();
        assert_eq!(store.load(), 42.5);
    }

    #[test]
    fn test_malformed_file_loads_as_zero() {
        let (temp_dir, store) = create_test_store();
        std::fs::write(temp_dir.path().join("balance.json"), "{{{ nope").unwrap();

        assert_eq!(store.load(), 0.0);
    }

    #[test]
    fn test_missing_key_loads_as_zero() {
        let (temp_dir, store) = create_test_store();
        std::fs::write(temp_dir.path().join("balance.json"), r#"{"total": 7}"#).unwrap();

        assert_eq!(store.load(), 0.0);
    }

    #[test]
    fn test_file_shape_on_disk() {
        let (temp_dir, store) = create_test_store();
        store.save(12.5).unwrap();

        let raw = std::fs::read_to_string(temp_dir.path().join("balance.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["balance"], 12.5);
    }
}
