//! Moni - interactive personal finance tracker for the terminal
//!
//! This library backs the `moni` binary. It keeps a running balance and a
//! transaction log in plain JSON files and exposes the menu flow, business
//! rules and rendering the binary wires together.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `display`: Terminal rendering of the transaction log
//! - `menu`: Interactive menu flow
//!
//! # Example
//!
//! ```rust,ignore
//! use moni::config::{MoniPaths, Settings};
//! use moni::storage::Storage;
//!
//! let paths = MoniPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod menu;
pub mod models;
pub mod services;
pub mod storage;

pub use error::MoniError;
