use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::filter::{DEFAULT_LIMIT, FilterOptions, MatchMode};

/// Default configuration embedded in the binary.
pub const DEFAULT_CONFIG_TOML: &str = include_str!("assets/config.toml");

/// Error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}':\n{source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Filenames to search for project-level configuration.
const CONFIG_FILENAMES: &[&str] = &["autocomplete.toml", ".autocomplete.toml"];

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Configuration for suggestion filtering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    /// Maximum number of suggestions shown at once.
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Where the query may match inside a suggestion.
    #[serde(default)]
    pub mode: MatchMode,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            mode: MatchMode::default(),
        }
    }
}

impl FilterConfig {
    pub fn options(&self) -> FilterOptions {
        FilterOptions {
            limit: self.limit,
            mode: self.mode,
        }
    }
}

/// Text shown around the input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct UiConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_label")]
    pub label: String,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            label: default_label(),
            placeholder: default_placeholder(),
        }
    }
}

impl Config {
    /// Load configuration in the following order:
    /// 1. Project-level config (autocomplete.toml or .autocomplete.toml in current/parent dirs)
    /// 2. User-level config (~/.config/autocomplete/config.toml)
    /// 3. Default embedded config
    ///
    /// Returns an error if a config file exists but is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        if let Some(path) = Self::project_config_path() {
            return Self::try_load_from_file(&path);
        }
        if let Some(path) = Self::user_config_path() {
            return Self::try_load_from_file(&path);
        }
        Ok(Self::default())
    }

    /// Load configuration from an explicitly specified path.
    ///
    /// Returns an error if the file doesn't exist or is malformed.
    /// If no path is specified, falls back to the default load order.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::try_load_from_file(p),
            None => Self::load(),
        }
    }

    /// Try to load config from a file, returning detailed errors on failure.
    fn try_load_from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn project_config_path() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        Self::find_config_in_ancestors(&cwd)
    }

    fn xdg_config_dir() -> Option<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "autocomplete")?;
        Some(dirs.config_dir().to_path_buf())
    }

    pub fn user_config_path() -> Option<PathBuf> {
        let config_path = Self::xdg_config_dir()?.join("config.toml");
        config_path.exists().then_some(config_path)
    }

    fn find_config_in_ancestors(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for filename in CONFIG_FILENAMES {
                let config_path = current.join(filename);
                if config_path.exists() {
                    return Some(config_path);
                }
            }
            if !current.pop() {
                break;
            }
        }
        None
    }
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_title() -> String {
    "Autocomplete Cities — Demo".to_string()
}

fn default_label() -> String {
    "Enter city or street".to_string()
}

fn default_placeholder() -> String {
    "Type a city...".to_string()
}
