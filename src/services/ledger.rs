//! Ledger service
//!
//! Business logic for posting deposits and withdrawals: validates amounts,
//! keeps the save order fixed (balance first, then log), and hands a
//! non-fatal log failure back to the caller instead of rolling anything
//! back.

use crate::error::{MoniError, MoniResult};
use crate::models::{Direction, Transaction, DEPOSIT_CATEGORY};
use crate::storage::Storage;

/// Outcome of a posted deposit or withdrawal
#[derive(Debug)]
pub struct PostOutcome {
    /// Balance after the operation was saved
    pub new_balance: f64,

    /// Set when the balance was saved but the log append failed
    pub log_error: Option<MoniError>,
}

/// Service for posting operations against the balance and the log
pub struct LedgerService<'a> {
    storage: &'a Storage,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Current balance (0 for a fresh or damaged install)
    pub fn balance(&self) -> f64 {
        self.storage.balance.load()
    }

    /// Add funds to the balance and record the deposit
    ///
    /// The balance is saved before the log is written. A failed log append
    /// does not fail the deposit: the outcome carries the error so the
    /// caller can warn and continue. The two files may drift at that point;
    /// there is no reconciliation.
    pub fn deposit(&self, amount: f64, reason: &str) -> MoniResult<PostOutcome> {
        validate_amount(amount)?;

        let new_balance = self.storage.balance.load() + amount;
        self.storage.balance.save(new_balance)?;

        let log_error = self
            .storage
            .logs
            .append(Direction::Added, amount, reason, DEPOSIT_CATEGORY)
            .err();

        Ok(PostOutcome {
            new_balance,
            log_error,
        })
    }

    /// Withdraw funds and record the withdrawal under a category
    ///
    /// Rejects the request without touching either file when the amount
    /// exceeds the current balance.
    pub fn withdraw(&self, amount: f64, reason: &str, category: &str) -> MoniResult<PostOutcome> {
        validate_amount(amount)?;

        let available = self.storage.balance.load();
        if amount > available {
            return Err(MoniError::InsufficientBalance {
                requested: amount,
                available,
            });
        }

        let new_balance = available - amount;
        self.storage.balance.save(new_balance)?;

        let log_error = self
            .storage
            .logs
            .append(Direction::Withdrawn, amount, reason, category)
            .err();

        Ok(PostOutcome {
            new_balance,
            log_error,
        })
    }

    /// Full transaction history in append order
    pub fn history(&self) -> Vec<Transaction> {
        self.storage.logs.read_all()
    }
}

/// Amounts must be positive, finite numbers
fn validate_amount(amount: f64) -> MoniResult<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(MoniError::Validation(
            "amount must be a positive number".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::MoniPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoniPaths::with_data_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(&paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_deposit_updates_balance_and_log() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        let outcome = service.deposit(50.0, "Salary").unwrap();

        assert_eq!(outcome.new_balance, 50.0);
        assert!(outcome.log_error.is_none());
        assert_eq!(service.balance(), 50.0);

        let history = service.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].action_symbol, "+");
        assert_eq!(history[0].category, DEPOSIT_CATEGORY);
    }

    #[test]
    fn test_deposit_then_withdraw_sequence() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        service.deposit(50.0, "Salary").unwrap();
        let outcome = service.withdraw(30.0, "Groceries", "Food").unwrap();

        assert_eq!(outcome.new_balance, 20.0);
        assert_eq!(service.balance(), 20.0);

        let history = service.history();
        assert_eq!(history.len(), 2);

        assert_eq!(history[0].action_symbol, "+");
        assert_eq!(history[0].amount, 50.0);
        assert_eq!(history[0].category, "N/A");

        assert_eq!(history[1].action_symbol, "-");
        assert_eq!(history[1].amount, 30.0);
        assert_eq!(history[1].reason, "Groceries");
        assert_eq!(history[1].category, "Food");
    }

    #[test]
    fn test_overdraft_rejected_and_state_unchanged() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        service.deposit(20.0, "Salary").unwrap();

        let err = service.withdraw(50.0, "Rent", "Housing").unwrap_err();
        assert!(matches!(
            err,
            MoniError::InsufficientBalance {
                requested,
                available,
            } if requested == 50.0 && available == 20.0
        ));

        // Neither file moved
        assert_eq!(service.balance(), 20.0);
        assert_eq!(service.history().len(), 1);
    }

    #[test]
    fn test_withdraw_from_empty_balance_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        let err = service.withdraw(1.0, "Coffee", "Food").unwrap_err();
        assert!(err.is_insufficient_balance());
        assert!(service.history().is_empty());
    }

    #[test]
    fn test_withdraw_exact_balance_allowed() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        service.deposit(50.0, "Salary").unwrap();
        let outcome = service.withdraw(50.0, "Rent", "Housing").unwrap();

        assert_eq!(outcome.new_balance, 0.0);
    }

    #[test]
    fn test_failed_log_append_is_nonfatal() {
        let (temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        // A directory squatting on the log path makes every append fail.
        std::fs::create_dir(temp_dir.path().join("logs.json")).unwrap();

        let outcome = service.deposit(50.0, "Salary").unwrap();

        assert!(outcome.log_error.is_some());
        assert_eq!(outcome.new_balance, 50.0);

        // The balance write went through even though the log did not.
        assert_eq!(service.balance(), 50.0);
    }

    #[test]
    fn test_failed_balance_save_propagates_and_skips_log() {
        let (temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        std::fs::create_dir(temp_dir.path().join("balance.json")).unwrap();

        let err = service.deposit(50.0, "Salary").unwrap_err();

        assert!(matches!(err, MoniError::Storage(_)));
        assert!(service.history().is_empty());
        assert!(!temp_dir.path().join("logs.json").exists());
    }

    #[test]
    fn test_non_positive_amounts_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        assert!(matches!(
            service.deposit(0.0, "nothing"),
            Err(MoniError::Validation(_))
        ));
        assert!(matches!(
            service.deposit(-5.0, "negative"),
            Err(MoniError::Validation(_))
        ));
        assert!(matches!(
            service.withdraw(0.0, "nothing", "Food"),
            Err(MoniError::Validation(_))
        ));
        assert!(matches!(
            service.deposit(f64::NAN, "nan"),
            Err(MoniError::Validation(_))
        ));
    }
}
