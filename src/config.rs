use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::errors::{ConfigError, FileError};
use crate::core::presets::DEFAULT_PRESET;
use crate::core::render::RenderOptions;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub generator: GeneratorConfig,
    pub data: DataConfig,
    pub output: RenderOptions,
}

/// Generation defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Fixed RNG seed; entropy-seeded when unset.
    pub seed: Option<u64>,
    /// Preset used when no request file or preset is given.
    pub default_preset: String,
}

/// Data locations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Override the default data directory.
    pub data_dir: Option<PathBuf>,
    /// Directory of `*.txt` wordpacks loaded on top of the bundled ones.
    pub wordpack_dir: Option<PathBuf>,
    /// JSON file of extra presets.
    pub presets_file: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            default_preset: DEFAULT_PRESET.to_string(),
        }
    }
}

/// How the configuration file was resolved.
#[derive(Debug)]
pub enum ConfigStatus {
    Loaded(PathBuf),
    Missing(PathBuf),
    Invalid(ConfigError),
}

impl ConfigStatus {
    /// Emit the outcome as a log record.
    pub fn log(&self) {
        match self {
            Self::Loaded(path) => log::info!("Loaded config from {}", path.display()),
            Self::Missing(path) => log::debug!("No config file at {}; using defaults", path.display()),
            Self::Invalid(e) => log::warn!("{e}; using defaults"),
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/sygil/config.toml`.
    /// Falls back to `Default` if the file is missing or unparseable.
    pub fn load() -> (Self, ConfigStatus) {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, falling back to defaults.
    ///
    /// Nothing is logged here; the caller reports the returned status once
    /// logging is initialized.
    pub fn load_from(config_path: &Path) -> (Self, ConfigStatus) {
        match Self::try_load_from(config_path) {
            Ok(Some(config)) => (config, ConfigStatus::Loaded(config_path.to_path_buf())),
            Ok(None) => (Self::default(), ConfigStatus::Missing(config_path.to_path_buf())),
            Err(e) => (Self::default(), ConfigStatus::Invalid(e)),
        }
    }

    /// Read and parse `config_path`; `Ok(None)` when the file does not exist.
    pub fn try_load_from(config_path: &Path) -> Result<Option<Self>, ConfigError> {
        let contents = match fs::read_to_string(config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(FileError::read_failed(config_path, e).into()),
        };
        toml::from_str(&contents)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: config_path.to_path_buf(),
                source,
            })
    }

    /// Resolved data directory (override or XDG default).
    pub fn data_dir(&self) -> PathBuf {
        self.data.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join("sygil"))
                .unwrap_or_else(|| PathBuf::from("data"))
        })
    }

    /// Directory for rolling log files.
    pub fn log_dir(&self) -> PathBuf {
        self.data_dir().join("logs")
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("sygil").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
