//! Recruit configuration.
//!
//! Each setting is resolved through a chain:
//!
//! 1. Command-line flag: explicit per-invocation override
//! 2. Environment variable: process/session level
//! 3. `~/.recruit/config.toml`: persistent default
//! 4. Built-in default
//!
//! A missing config file is fine; an unreadable or malformed one is not.

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

use crate::storage::Storage;

/// Environment variable overriding the data directory.
pub const DATA_DIR_VAR: &str = "RECRUIT_DATA_DIR";

/// Environment variable overriding the log level.
pub const LOG_LEVEL_VAR: &str = "RECRUIT_LOG_LEVEL";

const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine home directory, pass --data-dir or set RECRUIT_DATA_DIR")]
    NoHome,

    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConfigFile {
    /// Directory holding `staff.json` and `vacancies.json`.
    pub data_dir: Option<PathBuf>,

    /// Log filter, e.g. `info` or `recruit=debug`.
    pub log_level: Option<String>,
}

impl ConfigFile {
    /// Load `~/.recruit/config.toml`, or defaults when there is none.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The config file path: `~/.recruit/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".recruit").join("config.toml"))
    }
}

/// Flags given on the command line, if any.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub data_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log_level: String,
}

impl Config {
    /// Resolve settings from flags, the process environment, and the
    /// config file.
    pub fn load(overrides: Overrides) -> Result<Self, ConfigError> {
        let file = ConfigFile::load()?;
        Self::resolve(overrides, file, |key| env::var(key).ok(), Storage::default_root)
    }

    fn resolve(
        overrides: Overrides,
        file: ConfigFile,
        lookup: impl Fn(&str) -> Option<String>,
        default_root: impl FnOnce() -> Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let env = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let data_dir = match overrides
            .data_dir
            .or_else(|| env(DATA_DIR_VAR).map(PathBuf::from))
            .or(file.data_dir)
        {
            Some(dir) => dir,
            None => default_root().ok_or(ConfigError::NoHome)?,
        };

        let log_level = overrides
            .log_level
            .or_else(|| env(LOG_LEVEL_VAR))
            .or(file.log_level)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            data_dir,
            log_level,
        })
    }
}
