//! Display formatting for terminal output
//!
//! Provides utilities for formatting the transaction history for terminal
//! display, including month grouping and per-entry colors.

pub mod logs;

pub use logs::{format_log, format_log_row};
