//! Configuration module for moni
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence (greeting name, currency symbol)

pub mod paths;
pub mod settings;

pub use paths::MoniPaths;
pub use settings::Settings;
