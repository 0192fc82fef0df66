use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Narrowest breakpoint that still leaves room for the desktop bar.
pub const MIN_BREAKPOINT: u16 = 20;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    JsonError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `<config dir>/sitenav/navbar.toml` via `dirs::config_dir()`,
    /// falling back to the current directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("sitenav").join("navbar.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses and validates it.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads configuration from a specific path.
    ///
    /// Files ending in `.json` are parsed as JSON, anything else as TOML.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = Self::parse(path, &content)?;
        config.validate()?;

        for diagnostic in config.navbar.diagnostics() {
            tracing::warn!(path = %path.display(), "{diagnostic}");
        }
        tracing::info!(
            path = %path.display(),
            entries = config.navbar.menu_list.len(),
            "config loaded"
        );
        Ok(config)
    }

    fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            serde_json::from_str(content).map_err(|e| ConfigError::JsonError {
                path: path.to_path_buf(),
                source: e,
            })
        } else {
            toml::from_str(content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })
        }
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The breakpoint is at least `MIN_BREAKPOINT` columns
    /// - The logo reference is not empty
    ///
    /// Malformed menu entries are not errors; see `NavbarConfig::diagnostics`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.breakpoint < MIN_BREAKPOINT {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Breakpoint {} is below the minimum of {} columns",
                    self.display.breakpoint, MIN_BREAKPOINT
                ),
            });
        }

        if self.navbar.logo.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Navbar logo must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
