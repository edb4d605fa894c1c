//! Service layer for moni
//!
//! The service layer provides business logic on top of the storage layer:
//! amount validation, the overdraft check, and the fixed balance-then-log
//! save order.

pub mod ledger;

pub use ledger::{LedgerService, PostOutcome};
