//! Transaction log display formatting
//!
//! Renders the transaction history for the terminal: one line per entry in
//! log order, with a blank separator line whenever the month changes between
//! adjacent entries. Grouping follows the order entries were appended, not a
//! sorted order.

use colored::{Color, Colorize};

use crate::models::Transaction;

/// Format the full transaction history
pub fn format_log(transactions: &[Transaction], currency: &str) -> String {
    if transactions.is_empty() {
        return format!("{}\n{}\n", "No logs available.".red(), "=".repeat(40));
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{}\n{}\n",
        "Transaction Logs:".yellow(),
        "=".repeat(40)
    ));

    let mut previous_month: Option<&str> = None;
    for txn in transactions {
        let month = txn.month_key();
        if previous_month.is_some_and(|previous| previous != month) {
            output.push('\n');
        }

        output.push_str(&format_log_row(txn, currency));
        output.push('\n');
        previous_month = Some(month);
    }

    output
}

/// Format a single log entry
///
/// The symbol and amount are rendered in the color stored with the entry;
/// unknown color names fall back to white.
pub fn format_log_row(txn: &Transaction, currency: &str) -> String {
    let color = entry_color(txn);
    let amount = format!("{} {}", txn.amount, currency);

    format!(
        "[{}] {}{} - Reason: {} - Category: {}",
        txn.timestamp,
        txn.action_symbol.as_str().color(color),
        amount.color(color),
        txn.reason,
        txn.category
    )
}

/// Resolve the stored color name for an entry
fn entry_color(txn: &Transaction) -> Color {
    Color::from(txn.amount_color.as_str())
}
