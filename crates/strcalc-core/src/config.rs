use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::delimiter::DEFAULT_DELIMITER;

/// Environment variable naming the configuration file
pub const CONFIG_PATH_ENV: &str = "STRCALC_CONFIG_PATH";

/// Configuration file used when [`CONFIG_PATH_ENV`] is unset
pub const DEFAULT_CONFIG_PATH: &str = "strcalc.toml";

/// Numbers above this are left out of the sum
pub const MAXIMUM_NUMBER: i64 = 1000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CalculatorConfig {
    /// Delimiter every new calculator starts with
    #[serde(default = "default_delimiter")]
    pub default_delimiter: String,
    /// Inclusive ceiling for numbers counted in a sum
    #[serde(default = "default_maximum_number")]
    pub maximum_number: i64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self { default_delimiter: default_delimiter(), maximum_number: default_maximum_number() }
    }
}

impl CalculatorConfig {
    /// Loads the file named by `STRCALC_CONFIG_PATH` (or `strcalc.toml`).
    ///
    /// A missing file is not an error; defaults are used instead.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        if !Path::new(&config_path).exists() {
            warn!(
                "Configuration file '{}' not found. Using default configuration.",
                config_path
            );
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config_str = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;

        info!(path = %path.display(), "Loaded calculator configuration");
        Self::from_toml_str(&config_str)
    }

    pub fn from_toml_str(config_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_delimiter.is_empty() {
            return Err(ConfigError::Invalid("default_delimiter must not be empty".to_string()));
        }
        Ok(())
    }

    /// Applies `STRCALC_*` environment overrides.
    pub fn apply_profile(self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup. Unusable values are
    /// ignored and the current setting is kept.
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(delimiter) = lookup("STRCALC_DEFAULT_DELIMITER") {
            if !delimiter.is_empty() {
                self.default_delimiter = delimiter;
            }
        }
        if let Some(maximum) = lookup("STRCALC_MAXIMUM_NUMBER") {
            if let Ok(maximum_num) = maximum.parse::<i64>() {
                self.maximum_number = maximum_num;
            }
        }
        self
    }
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

fn default_maximum_number() -> i64 {
    MAXIMUM_NUMBER
}
