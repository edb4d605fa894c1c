//! Custom error types for moni
//!
//! One thiserror enum covers the whole library; `main` wraps it in anyhow at
//! the binary boundary.

use thiserror::Error;

/// The main error type for moni operations
#[derive(Error, Debug)]
pub enum MoniError {
    /// Problems resolving paths or reading the settings file
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O failures outside the storage helpers (prompts, stdin)
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON encode/decode failures
    #[error("JSON error: {0}")]
    Json(String),

    /// Rejected user input (non-positive amounts)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Failures in the atomic write pipeline
    #[error("Storage error: {0}")]
    Storage(String),

    /// A 1-based selection index that is outside the offered range
    #[error("Invalid choice {choice}: enter a number between 1 and {available}")]
    InvalidChoice { choice: usize, available: usize },

    /// Withdrawal larger than the current balance
    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: f64, available: f64 },
}

impl MoniError {
    /// Create an invalid-choice error for a 1-based selection
    pub fn invalid_choice(choice: usize, available: usize) -> Self {
        Self::InvalidChoice { choice, available }
    }

    /// Check if this is an invalid-choice error
    pub fn is_invalid_choice(&self) -> bool {
        matches!(self, Self::InvalidChoice { .. })
    }

    /// Check if this is an insufficient-balance error
    pub fn is_insufficient_balance(&self) -> bool {
        matches!(self, Self::InsufficientBalance { .. })
    }
}

impl From<std::io::Error> for MoniError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MoniError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for moni operations
pub type MoniResult<T> = Result<T, MoniError>;
