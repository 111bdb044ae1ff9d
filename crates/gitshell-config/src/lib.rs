//! Configuration management for gitshell.
//!
//! This crate handles loading the optional `gitshell.toml` configuration file.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{CONFIG_FILE_NAME, find_and_load_config_from, load_config};
pub use schema::{Config, PushConfig, RepositoryConfig};
