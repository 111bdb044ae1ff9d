//! Configuration schema.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Repository configuration.
    #[serde(default)]
    pub repository: RepositoryConfig,

    /// Push configuration.
    #[serde(default)]
    pub push: PushConfig,
}

impl Config {
    /// Checks values that parse but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns an error if the push remote is blank.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.push.remote.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "push.remote must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Repository configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Directory git commands run in. Defaults to the current directory.
    pub working_dir: Option<PathBuf>,
}

/// Push configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushConfig {
    /// Remote used when none is given on the command line.
    #[serde(default = "default_remote")]
    pub remote: String,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            remote: default_remote(),
        }
    }
}

fn default_remote() -> String {
    "origin".to_string()
}
