//! User settings loaded from the platform config directory
//!
//! Every field has a default; a missing config file is not an error.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the icon generation service
    pub base_url: String,

    /// Where the history file lives
    pub history_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            history_path: crate::history::FileBackend::default_path(),
        }
    }
}

impl Settings {
    /// Location of the config file
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("icongenius")
            .join("config.toml")
    }

    /// Load settings, falling back to defaults when the file is absent or
    /// unreadable
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    fn load_from(path: &std::path::Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return Self::default(),
        };
        match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("ignoring invalid config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let settings = Settings::load_from(std::path::Path::new("/nonexistent/config.toml"));
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "base_url = \"https://icons.example.com\"\n").unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings.base_url, "https://icons.example.com");
        assert_eq!(settings.history_path, Settings::default().history_path);
    }

    #[test]
    fn test_invalid_config_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "base_url = [not toml").unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
    }
}
