//! Core data models for moni
//!
//! This module contains the data structures that represent the tracking
//! domain: transactions and the spending category catalog.

pub mod category;
pub mod transaction;

pub use category::{CategoryCatalog, CATEGORIES};
pub use transaction::{Direction, Transaction, DEPOSIT_CATEGORY, TIMESTAMP_FORMAT};
