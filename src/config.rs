//! Configuration for the activation shell.
//!
//! Read from `config.toml` in the platform config directory. Every key is
//! optional and a missing or broken file falls back to defaults.

use crate::constants::DEFAULT_NAMESPACE;
use crate::error::AppError;
use crate::presentation::PassthroughStyle;
use directories::ProjectDirs;
use log::{log, Level};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub presentation: PresentationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Prefix of the bridge channel name
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresentationConfig {
    #[serde(default)]
    pub passthrough_style: PassthroughStyle,
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Where the configuration came from.
///
/// Config is read before the logger exists, so the outcome is kept and
/// reported once logging is up.
#[derive(Debug)]
pub enum ConfigSource {
    File(PathBuf),
    Missing(PathBuf),
    Invalid { path: PathBuf, error: AppError },
    NoProjectDirs,
}

impl ConfigSource {
    pub fn level(&self) -> Level {
        match self {
            ConfigSource::File(_) | ConfigSource::Missing(_) => Level::Info,
            ConfigSource::Invalid { .. } | ConfigSource::NoProjectDirs => Level::Warn,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ConfigSource::File(path) => format!("Loaded configuration from {}", path.display()),
            ConfigSource::Missing(path) => {
                format!("No config file found at {}, using defaults", path.display())
            }
            ConfigSource::Invalid { path, error } => {
                format!("Failed to load config file {}: {error}, using defaults", path.display())
            }
            ConfigSource::NoProjectDirs => {
                format!("{}, using default configuration", AppError::NoProjectDirs)
            }
        }
    }

    pub fn log(&self) {
        log!(self.level(), "{}", self.message());
    }
}

impl Config {
    /// Load from `path`, or the default path when `None`, falling back to defaults
    pub fn resolve(path: Option<&Path>) -> (Self, ConfigSource) {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_config_path() {
                Ok(path) => path,
                Err(_) => return (Self::default(), ConfigSource::NoProjectDirs),
            },
        };

        match Self::try_load_from_path(&path) {
            Ok(Some(config)) => (config, ConfigSource::File(path)),
            Ok(None) => (Self::default(), ConfigSource::Missing(path)),
            Err(error) => (Self::default(), ConfigSource::Invalid { path, error }),
        }
    }

    /// `Ok(None)` when the file does not exist
    pub fn try_load_from_path(path: &Path) -> Result<Option<Self>, AppError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(toml::from_str(&contents)?))
    }

    pub fn default_config_path() -> Result<PathBuf, AppError> {
        let proj_dirs = ProjectDirs::from("com", "textfixer", "TextFixer").ok_or(AppError::NoProjectDirs)?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}
