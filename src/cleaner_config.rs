use serde::{Deserialize, Serialize};
use std::{fmt::Display, fs, path::{Path, PathBuf}};

use crate::ConfigError;

/// Where to read the raw dependency list from and where to save the cleaned one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanerConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl CleanerConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        CleanerConfig {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }

    /// Loads a config from a `.json`/`.toml` file, or parses `config` inline
    /// when it does not name an existing file.
    pub fn from_config(config: &str) -> Result<CleanerConfig, ConfigError> {
        if Path::new(config).exists() {
            let config_content = fs::read_to_string(config)?;
            if config.ends_with(".json") {
                Ok(serde_json::from_str(&config_content)?)
            } else if config.ends_with(".toml") {
                #[cfg(feature = "toml_config")]
                {
                    Ok(toml::from_str(&config_content)?)
                }
                #[cfg(not(feature = "toml_config"))]
                {
                    Err(ConfigError::TomlNotEnabled)
                }
            } else {
                Err(ConfigError::UnsupportedFormat)
            }
        } else {
            // Try parsing as JSON first, then TOML if that fails and the feature is enabled
            serde_json::from_str(config).or_else(|err| {
                #[cfg(feature = "toml_config")]
                {
                    if config.trim_start().starts_with('{') {
                        return Err(err.into());
                    }
                    toml::from_str(config).map_err(|e| e.into())
                }
                #[cfg(not(feature = "toml_config"))]
                {
                    Err(err.into())
                }
            })
        }
    }
}

impl Display for CleanerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        write!(f, "{}", json)
    }
}
