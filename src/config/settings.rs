//! User settings for moni
//!
//! Holds the display preferences: the name used in the menu greeting and the
//! currency symbol shown next to amounts. Loaded once at startup and passed
//! into the menu explicitly.

use serde::{Deserialize, Serialize};

use super::paths::MoniPaths;
use crate::error::MoniError;

/// User settings for moni
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Name used in the menu greeting
    #[serde(default = "default_user")]
    pub user: String,

    /// Currency symbol shown next to amounts
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_user() -> String {
    "Axo".to_string()
}

fn default_currency() -> String {
    "€".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user: default_user(),
            currency: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &MoniPaths) -> Result<Self, MoniError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| MoniError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| MoniError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Not saved here; the caller persists when it wants the file
            Ok(Settings::default())
        }
    }

    /// Persist settings as pretty-printed JSON at `config.json`
    pub fn save(&self, paths: &MoniPaths) -> Result<(), MoniError> {
        // Ensure the data directory exists
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| MoniError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| MoniError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.user, "Axo");
        assert_eq!(settings.currency, "€");
    }

    #[test]
    fn test_load_missing_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoniPaths::with_data_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.user, "Axo");
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoniPaths::with_data_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            user: "Robin".to_string(),
            currency: "$".to_string(),
        };

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.user, "Robin");
        assert_eq!(loaded.currency, "$");
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoniPaths::with_data_dir(temp_dir.path().to_path_buf());

        std::fs::write(paths.settings_file(), r#"{"user": "Robin"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.user, "Robin");
        assert_eq!(loaded.currency, "€");
    }
}
