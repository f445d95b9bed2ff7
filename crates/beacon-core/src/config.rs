//! Configuration management for Beacon.
//!
//! Loads configuration from ${BEACON_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Color theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl ThemeChoice {
    pub fn toggled(self) -> Self {
        match self {
            ThemeChoice::Dark => ThemeChoice::Light,
            ThemeChoice::Light => ThemeChoice::Dark,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ThemeChoice::Dark => "dark",
            ThemeChoice::Light => "light",
        }
    }
}

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Merges user config values into the default template.
///
/// This ensures new comments/sections from the template are always present,
/// while preserving user's customized values.
fn merge_with_template(user_config: &str) -> Result<String> {
    use toml_edit::{DocumentMut, Item};

    let mut doc: DocumentMut = default_config_template()
        .parse()
        .context("Failed to parse default config template")?;

    let user_doc: DocumentMut = user_config.parse().context("Failed to parse user config")?;

    for (key, value) in user_doc.as_table().iter() {
        if let Item::Value(v) = value {
            doc[key] = Item::Value(v.clone());
        }
    }

    Ok(doc.to_string())
}

pub mod paths {
    //! Path resolution for Beacon configuration and data directories.
    //!
    //! BEACON_HOME resolution order:
    //! 1. BEACON_HOME environment variable (if set)
    //! 2. ~/.config/beacon (default)

    use std::path::PathBuf;

    /// Returns the Beacon home directory.
    ///
    /// Checks BEACON_HOME env var first, falls back to ~/.config/beacon
    pub fn beacon_home() -> PathBuf {
        if let Ok(home) = std::env::var("BEACON_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("beacon"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        beacon_home().join("config.toml")
    }

    /// Returns the directory the portal writes log files into.
    pub fn logs_dir() -> PathBuf {
        beacon_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Color theme for the portal.
    pub theme: ThemeChoice,

    /// Event loop tick interval in milliseconds.
    pub tick_rate_ms: u64,

    /// Open registration links in the system browser.
    /// When false, the link is shown in a toast instead.
    pub open_links: bool,
}

impl Config {
    const DEFAULT_TICK_RATE_MS: u64 = 100;

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Tick interval for the TUI event loop.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    /// Saves only the theme field to the config file.
    ///
    /// Creates the file if it doesn't exist.
    /// Preserves existing fields and comments using toml_edit.
    pub fn save_theme(theme: ThemeChoice) -> Result<()> {
        Self::save_theme_to(&paths::config_path(), theme)
    }

    /// Saves only the theme field to a specific config file path.
    ///
    /// Creates the file with the default template if it doesn't exist.
    /// If the file exists, merges user values into the latest template.
    pub fn save_theme_to(path: &Path, theme: ThemeChoice) -> Result<()> {
        use toml_edit::{DocumentMut, value};

        let contents = if path.exists() {
            let user_config = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            merge_with_template(&user_config)?
        } else {
            default_config_template().to_string()
        };

        let mut doc: DocumentMut = contents
            .parse()
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        doc["theme"] = value(theme.display_name());

        Self::write_config(path, &doc.to_string())
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::default(),
            tick_rate_ms: Self::DEFAULT_TICK_RATE_MS,
            open_links: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    /// Config loading: missing file returns defaults.
    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.theme, ThemeChoice::Dark);
        assert_eq!(config.tick_rate_ms, 100);
        assert!(config.open_links);
    }

    /// Config loading: partial config merges with defaults.
    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "theme = \"light\"\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.theme, ThemeChoice::Light);
        assert_eq!(config.tick_rate_ms, 100);
    }

    /// Config init: creates file with defaults, creates parent dirs.
    #[test]
    fn test_init_creates_config_with_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("subdir").join("config.toml");

        Config::init(&config_path).unwrap();

        assert!(config_path.exists());
        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("# Beacon Configuration"));
        assert!(contents.contains("theme = \"dark\""));
    }

    /// Config init: fails if file exists (no silent overwrite).
    #[test]
    fn test_init_fails_if_exists() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "").unwrap();

        let result = Config::init(&config_path);
        assert!(result.is_err());
    }

    /// save_theme: creates new config file with template if it doesn't exist.
    #[test]
    fn test_save_theme_creates_file_with_template() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        Config::save_theme_to(&config_path, ThemeChoice::Light).unwrap();

        assert!(config_path.exists());
        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.theme, ThemeChoice::Light);

        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("# Beacon Configuration"));
    }

    /// save_theme: preserves other fields in existing config.
    #[test]
    fn test_save_theme_preserves_other_fields() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(
            &config_path,
            "theme = \"dark\"\ntick_rate_ms = 250\nopen_links = false\n",
        )
        .unwrap();

        Config::save_theme_to(&config_path, ThemeChoice::Light).unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.theme, ThemeChoice::Light);
        assert_eq!(config.tick_rate_ms, 250); // preserved
        assert!(!config.open_links); // preserved
    }

    /// save_theme: roundtrip toggling works.
    #[test]
    fn test_save_theme_roundtrip() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        Config::save_theme_to(&config_path, ThemeChoice::Light).unwrap();
        Config::save_theme_to(&config_path, ThemeChoice::Dark).unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.theme, ThemeChoice::Dark);
    }

    /// Tick rate: zero is clamped to a valid duration.
    #[test]
    fn test_tick_rate_zero_is_clamped() {
        let config = Config {
            tick_rate_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.tick_rate(), Duration::from_millis(1));
    }
}
