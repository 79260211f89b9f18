//! Configuration management for `td`.
//!
//! Settings are layered, later sources winning:
//! - Built-in defaults
//! - YAML config file (`$TD_CONFIG`, else `./.td.yaml` when present)
//! - Command-line flags (clap folds `TD_FILE` into `--file`)

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Storage file used when nothing else is configured.
pub const DEFAULT_FILE: &str = "todo.json";

/// Config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".td.yaml";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "TD_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The JSON document holding the list.
    pub file: PathBuf,
    /// Emit JSON reports instead of text lines.
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_FILE),
            json: false,
        }
    }
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub file: Option<PathBuf>,
    pub json: Option<bool>,
}

/// On-disk config file shape. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    file: Option<PathBuf>,
    json: Option<bool>,
}

impl Config {
    /// Resolve settings from the config file (if any) and `overrides`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if an existing config file cannot be read or
    /// parsed.
    pub fn load(overrides: &CliOverrides) -> Result<Self, ConfigError> {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::load_from(explicit.as_deref(), Path::new("."), overrides)
    }

    /// Like [`Config::load`], with the config path and lookup directory given
    /// explicitly.
    ///
    /// An `explicit` path must exist; the fallback `.td.yaml` in `cwd` is
    /// optional.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the config file cannot be read or parsed.
    pub fn load_from(
        explicit: Option<&Path>,
        cwd: &Path,
        overrides: &CliOverrides,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let candidate = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let fallback = cwd.join(CONFIG_FILE_NAME);
                fallback.is_file().then_some(fallback)
            }
        };

        if let Some(path) = candidate {
            let file_config = read_file_config(&path)?;
            config.merge_file(file_config, &path);
            debug!(path = %path.display(), "Loaded config file");
        }

        if let Some(file) = &overrides.file {
            config.file.clone_from(file);
        }
        if let Some(json) = overrides.json {
            config.json = json;
        }

        debug!(file = %config.file.display(), json = config.json, "Resolved config");
        Ok(config)
    }

    fn merge_file(&mut self, file_config: FileConfig, source: &Path) {
        if let Some(file) = file_config.file {
            self.file = if file.is_relative() {
                let base = source.parent().unwrap_or_else(|| Path::new("."));
                dunce::simplified(&base.join(&file)).to_path_buf()
            } else {
                file
            };
        }
        if let Some(json) = file_config.json {
            self.json = json;
        }
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if raw.trim().is_empty() {
        return Ok(FileConfig::default());
    }
    serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
