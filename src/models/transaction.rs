//! Transaction model
//!
//! Represents one recorded deposit or withdrawal. The struct mirrors the log
//! file format field for field, so the on-disk JSON stays compatible with
//! logs written by earlier versions of the tool.

use std::fmt;

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Timestamp format used in log entries (second resolution, local time)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Category recorded for deposits, which carry no spending category
pub const DEPOSIT_CATEGORY: &str = "N/A";

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Funds added to the balance
    Added,
    /// Funds withdrawn from the balance
    Withdrawn,
}

impl Direction {
    /// The symbol stored in the log and shown before the amount
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Added => "+",
            Self::Withdrawn => "-",
        }
    }

    /// The color name stored in the log for this direction
    pub fn color(&self) -> &'static str {
        match self {
            Self::Added => "green",
            Self::Withdrawn => "red",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added => write!(f, "Added"),
            Self::Withdrawn => write!(f, "Withdrawn"),
        }
    }
}

/// One recorded transaction
///
/// Entries are immutable once appended; the log preserves append order.
/// Every field defaults when absent so a hand-edited log file never makes
/// the display crash.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    /// Local time the entry was recorded, `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,

    /// `"+"` for deposits, `"-"` for withdrawals (`""` tolerated on read)
    pub action_symbol: String,

    /// Amount moved, always positive
    pub amount: f64,

    /// Color name used when rendering the amount
    pub amount_color: String,

    /// Free-text reason entered by the user
    pub reason: String,

    /// Spending category, or `"N/A"` for deposits
    pub category: String,
}

impl Transaction {
    /// Create a record stamped with the current local time
    pub fn new(
        direction: Direction,
        amount: f64,
        reason: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self::with_timestamp(
            Local::now().format(TIMESTAMP_FORMAT).to_string(),
            direction,
            amount,
            reason,
            category,
        )
    }

    /// Create a record with an explicit timestamp string
    pub fn with_timestamp(
        timestamp: impl Into<String>,
        direction: Direction,
        amount: f64,
        reason: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            action_symbol: direction.symbol().to_string(),
            amount,
            amount_color: direction.color().to_string(),
            reason: reason.into(),
            category: category.into(),
        }
    }

    /// The `YYYY-MM` prefix of the timestamp, used for month grouping
    ///
    /// Falls back to the whole timestamp when it is shorter than a
    /// year-month prefix.
    pub fn month_key(&self) -> &str {
        self.timestamp.get(..7).unwrap_or(&self.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_new_deposit_record() {
        let txn = Transaction::new(Direction::Added, 50.0, "Salary", DEPOSIT_CATEGORY);

        assert_eq!(txn.action_symbol, "+");
        assert_eq!(txn.amount_color, "green");
        assert_eq!(txn.amount, 50.0);
        assert_eq!(txn.reason, "Salary");
        assert_eq!(txn.category, "N/A");
    }

    #[test]
    fn test_new_withdrawal_record() {
        let txn = Transaction::new(Direction::Withdrawn, 30.0, "Groceries", "Food");

        assert_eq!(txn.action_symbol, "-");
        assert_eq!(txn.amount_color, "red");
        assert_eq!(txn.category, "Food");
    }

    #[test]
    fn test_timestamp_is_parseable() {
        let txn = Transaction::new(Direction::Added, 1.0, "r", DEPOSIT_CATEGORY);

        assert!(NaiveDateTime::parse_from_str(&txn.timestamp, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_month_key() {
        let txn = Transaction::with_timestamp(
            "2025-01-15 08:30:00",
            Direction::Withdrawn,
            12.5,
            "Bus",
            "Transport",
        );

        assert_eq!(txn.month_key(), "2025-01");
    }

    #[test]
    fn test_month_key_short_timestamp() {
        let txn = Transaction {
            timestamp: "2025".to_string(),
            ..Transaction::default()
        };

        assert_eq!(txn.month_key(), "2025");
    }

    #[test]
    fn test_serialization_keys() {
        let txn = Transaction::new(Direction::Added, 50.0, "Salary", DEPOSIT_CATEGORY);
        let json = serde_json::to_string(&txn).unwrap();

        for key in [
            "timestamp",
            "action_symbol",
            "amount",
            "amount_color",
            "reason",
            "category",
        ] {
            assert!(json.contains(key), "missing key {}", key);
        }

        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, deserialized);
    }

    #[test]
    fn test_missing_fields_tolerated() {
        let txn: Transaction = serde_json::from_str(r#"{"amount": 9.5}"#).unwrap();

        assert_eq!(txn.amount, 9.5);
        assert_eq!(txn.timestamp, "");
        assert_eq!(txn.action_symbol, "");
        assert_eq!(txn.category, "");
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Added.to_string(), "Added");
        assert_eq!(Direction::Withdrawn.to_string(), "Withdrawn");
    }
}
