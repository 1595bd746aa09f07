use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use engine_logging::{engine_debug, engine_info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::persist::{ensure_dir, write_atomic, PersistError};

/// Directory under the config home that holds everything this tool writes.
pub const APP_DIR: &str = "markdown-to-pdf";
pub const CONFIG_FILE: &str = "config.toml";
/// Overrides the config-home base directory.
pub const CONFIG_HOME_ENV: &str = "XDG_CONFIG_HOME";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub gotenberg: GotenbergConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GotenbergConfig {
    /// Base URL of the conversion service, e.g. `http://localhost:3000`.
    pub endpoint: String,
}

impl Config {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            gotenberg: GotenbergConfig {
                endpoint: endpoint.into(),
            },
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.gotenberg.endpoint
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to get user home directory")]
    NoHomeDir,
    #[error("failed to create config directory {path:?}: {source}")]
    CreateDir { path: PathBuf, source: PersistError },
    #[error("failed to read config file {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to load config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to encode config: {0}")]
    Encode(#[from] toml::ser::Error),
    #[error("failed to write config file {path:?}: {source}")]
    Write { path: PathBuf, source: PersistError },
}

/// Resolves the config home: a non-empty `XDG_CONFIG_HOME`, else `<home>/.config`.
pub fn config_home_from(
    xdg_config_home: Option<OsString>,
    home: Option<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    if let Some(dir) = xdg_config_home.filter(|dir| !dir.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    home.map(|home| home.join(".config"))
        .ok_or(ConfigError::NoHomeDir)
}

pub fn config_home() -> Result<PathBuf, ConfigError> {
    config_home_from(env::var_os(CONFIG_HOME_ENV), dirs::home_dir())
}

/// `<config-home>/markdown-to-pdf`, created if missing.
pub fn app_config_dir() -> Result<PathBuf, ConfigError> {
    let dir = config_home()?.join(APP_DIR);
    ensure_dir(&dir).map_err(|source| ConfigError::CreateDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

/// Reads and writes the single config file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// The per-user location, creating its directory on the way.
    pub fn locate() -> Result<Self, ConfigError> {
        Ok(Self::at(app_config_dir()?.join(CONFIG_FILE)))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` means there is no config yet and the setup form should run.
    pub fn load(&self) -> Result<Option<Config>, ConfigError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                engine_debug!("No config at {:?}", self.path);
                return Ok(None);
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let config: Config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;
        engine_info!("Loaded config from {:?}", self.path);
        Ok(Some(config))
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let text = toml::to_string(config)?;
        if let Some(dir) = self.path.parent() {
            ensure_dir(dir).map_err(|source| ConfigError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        write_atomic(&self.path, text.as_bytes()).map_err(|source| ConfigError::Write {
            path: self.path.clone(),
            source,
        })?;
        engine_info!("Saved config to {:?}", self.path);
        Ok(())
    }
}
