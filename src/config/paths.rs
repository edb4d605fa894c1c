//! Path management for moni
//!
//! Provides XDG-compliant resolution of the data directory that holds the
//! balance, log, and settings files.
//!
//! ## Path Resolution Order
//!
//! 1. `MONI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/moni` or `~/.config/moni`
//! 3. Windows: `%APPDATA%\moni`

use std::path::PathBuf;

use crate::error::MoniError;

/// Manages all paths used by moni
#[derive(Debug, Clone)]
pub struct MoniPaths {
    /// Directory holding all moni data files
    data_dir: PathBuf,
}

impl MoniPaths {
    /// Create a new MoniPaths instance
    ///
    /// Resolution order: `MONI_DATA_DIR` env var, then
    /// `$XDG_CONFIG_HOME/moni` or `~/.config/moni` on Unix,
    /// `%APPDATA%\moni` on Windows.
    ///
    /// # Errors
    ///
    /// Fails when neither `XDG_CONFIG_HOME` nor `HOME` is set (Unix), or
    /// `APPDATA` is missing (Windows).
    pub fn new() -> Result<Self, MoniError> {
        let data_dir = if let Ok(custom) = std::env::var("MONI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { data_dir })
    }

    /// Create MoniPaths with an explicit data directory (flag override, tests)
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Get the data directory
    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    /// Get the path to the balance file
    pub fn balance_file(&self) -> PathBuf {
        self.data_dir.join("balance.json")
    }

    /// Get the path to the transaction log file
    pub fn logs_file(&self) -> PathBuf {
        self.data_dir.join("logs.json")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.data_dir.join("config.json")
    }

    /// Ensure the data directory exists
    pub fn ensure_directories(&self) -> Result<(), MoniError> {
        std::fs::create_dir_all(&self.data_dir)
            .map_err(|e| MoniError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if moni has been initialized (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory for the platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, MoniError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| MoniError::Config("Could not determine home directory".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("moni"))
}

/// Resolve the default data directory for the platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, MoniError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| MoniError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("moni"))
}
