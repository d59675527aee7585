//! Module configuration.
//!
//! Parses `ssi.toml` with serde and auto-discovers the file in parent
//! directories when no explicit path is given. A missing file is not an
//! error; the module then runs with defaults (no extension filter).

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "ssi.toml";

/// Module configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ModuleConfig {
    /// SSI module settings.
    pub ssi: SsiConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// `[ssi]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SsiConfig {
    /// Suffix a resource's resolved filename must carry for the module to
    /// act, compared case-sensitively (e.g. `".shtml"`). `None` disables the
    /// filter and every eligible response is processed.
    pub allow_file_extension: Option<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("configuration error: {0}")]
    Validation(String),
}

impl ModuleConfig {
    /// Load configuration.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `ssi.toml` in the current directory and its parents, falling back
    /// to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist, or if
    /// reading, parsing, or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if a configured extension is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ext) = &self.ssi.allow_file_extension
            && ext.is_empty()
        {
            return Err(ConfigError::Validation(
                "ssi.allow_file_extension cannot be empty".to_owned(),
            ));
        }
        Ok(())
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;
        Ok(config)
    }

    /// Search for the config file in the current directory and its parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }
}
