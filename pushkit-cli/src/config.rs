//! Optional TOML configuration for the CLI

use std::path::{Path, PathBuf};

use pushkit_json::WritingOptions;
use serde::Deserialize;
use thiserror::Error;

/// Configuration file errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("cannot read config {}: {source}", .path.display())]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
    /// File is not valid TOML for [`Config`]
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        /// Path that failed
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// JSON output formatting
    pub output: OutputConfig,
    /// Defaults for `register`
    pub registration: RegistrationConfig,
    /// Defaults for `push`
    pub push: PushConfig,
}

/// `[output]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Pretty-print JSON output
    pub pretty: bool,
    /// Sort object keys in JSON output
    pub sorted_keys: bool,
}

/// `[registration]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistrationConfig {
    /// Time zone used when `--tz` is not given
    pub time_zone: Option<String>,
}

/// `[push]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PushConfig {
    /// Endpoint used when `--url` is not given
    pub url: Option<String>,
}

impl Config {
    /// Load from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse TOML text
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Writing options; an explicit flag wins over the `[output]` value.
    pub fn writing(&self, pretty: Option<bool>, sorted_keys: Option<bool>) -> WritingOptions {
        WritingOptions {
            pretty_print: pretty.unwrap_or(self.output.pretty),
            sorted_keys: sorted_keys.unwrap_or(self.output.sorted_keys),
        }
    }
}
