// ABOUTME: Application configuration handling.
// ABOUTME: Loads and saves settings from TOML config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{BorderKind, KeyBindings};

/// Which arrangement of panes to build at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// Recursive split tree: explorer | (results / preview)
    #[default]
    Tree,
    /// Fixed left / top-right / bottom-right arrangement
    Fixed,
}

/// Minimum sizes for the panes, in terminal cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub mode: LayoutMode,
    pub explorer_min_width: u16,
    pub content_min_width: u16,
    pub results_min_height: u16,
    pub preview_min_height: u16,
    /// Minimum pane width in the fixed arrangement
    pub min_width: u16,
    /// Minimum pane height in the fixed arrangement
    pub min_height: u16,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            mode: LayoutMode::Tree,
            explorer_min_width: 20,
            content_min_width: 20,
            results_min_height: 10,
            preview_min_height: 5,
            min_width: 10,
            min_height: 10,
        }
    }
}

/// Border styles for focused and unfocused panes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    pub active_border: BorderKind,
    pub inactive_border: BorderKind,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            active_border: BorderKind::Thick,
            inactive_border: BorderKind::Normal,
        }
    }
}

/// Where the results pane gets its rows from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultsSettings {
    /// Tab-separated file streamed into the results pane
    pub source: Option<PathBuf>,
    pub headers: Vec<String>,
    /// Stop reading after this many rows
    pub limit: usize,
}

impl Default for ResultsSettings {
    fn default() -> Self {
        Self {
            source: None,
            headers: vec!["PRICE".to_string(), "CITY".to_string()],
            limit: 1000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log file; the terminal itself is taken by the UI
    pub file: Option<PathBuf>,
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}

impl LoggingSettings {
    /// Configured log file, falling back to ~/.local/state/moto/moto.log
    pub fn file_path(&self) -> Option<PathBuf> {
        self.file.clone().or_else(|| {
            dirs::state_dir()
                .or_else(dirs::data_local_dir)
                .map(|p| p.join("moto").join("moto.log"))
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub layout: LayoutSettings,
    pub keys: KeyBindings,
    pub theme: ThemeSettings,
    pub results: ResultsSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

impl Config {
    /// Get the default config file path (~/.config/moto/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("moto").join("config.toml"))
    }

    /// Load config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from default path, or return default config if not found.
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_or_default_from(&path),
            None => Ok(Self::default()),
        }
    }

    fn load_or_default_from(path: &std::path::Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.layout.mode = LayoutMode::Fixed;
        config.layout.min_width = 12;
        config.theme.active_border = BorderKind::Double;
        config.results.source = Some(PathBuf::from("/tmp/prices.tsv"));
        config.keys.switch_pane = vec!["tab".to_string(), "ctrl+w".to_string()];

        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [layout]
            mode = "fixed"

            [keys]
            quit = ["esc"]
            "#,
        )
        .unwrap();

        assert_eq!(config.layout.mode, LayoutMode::Fixed);
        assert_eq!(config.layout.min_height, 10);
        assert_eq!(config.keys.quit, vec!["esc".to_string()]);
        assert_eq!(config.keys.switch_pane, vec!["tab".to_string()]);
        assert_eq!(config.theme.active_border, BorderKind::Thick);
        assert_eq!(config.results.limit, 1000);
    }

    #[test]
    fn unknown_border_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[theme]\nactive_border = \"wavy\"\n").unwrap();

        assert!(matches!(Config::load(&path), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }

    #[test]
    fn absent_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());

        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[layout\n").unwrap();
        assert!(Config::load_or_default_from(&path).is_err());
    }

    #[test]
    fn explicit_log_file_wins() {
        let logging = LoggingSettings {
            file: Some(PathBuf::from("/tmp/moto-test.log")),
            ..LoggingSettings::default()
        };
        assert_eq!(logging.file_path(), Some(PathBuf::from("/tmp/moto-test.log")));
    }
}
