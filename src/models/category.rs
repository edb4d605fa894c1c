//! Spending category catalog
//!
//! Withdrawals are tagged with one of a fixed set of categories. The list is
//! defined in code, ordered, and selected by 1-based index at the prompt.

use crate::error::{MoniError, MoniResult};

/// The fixed spending categories, in menu order
pub const CATEGORIES: [&str; 10] = [
    "Housing",
    "Transport",
    "Food",
    "Health",
    "Education and Personal Development",
    "Entertainment and Leisure",
    "Clothing and Accessories",
    "Unexpected Expenses",
    "Savings and Investments",
    "Donations and Gifts",
];

/// Read-only access to the fixed category list
pub struct CategoryCatalog;

impl CategoryCatalog {
    /// All categories, in the order they are presented to the user
    pub fn list() -> &'static [&'static str] {
        &CATEGORIES
    }

    /// Number of categories in the catalog
    pub fn len() -> usize {
        CATEGORIES.len()
    }

    /// Resolve a 1-based menu choice to a category name
    ///
    /// # Errors
    ///
    /// Returns [`MoniError::InvalidChoice`] when the index is 0 or beyond the
    /// end of the list; the caller is expected to re-prompt.
    pub fn select(choice: usize) -> MoniResult<&'static str> {
        choice
            .checked_sub(1)
            .and_then(|index| CATEGORIES.get(index).copied())
            .ok_or_else(|| MoniError::invalid_choice(choice, CATEGORIES.len()))
    }
}
