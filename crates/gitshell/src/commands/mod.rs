//! CLI commands.

pub mod add;
pub mod branch;
pub mod commit;
pub mod config;
pub mod push;
pub mod status;
pub mod tag;

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use gitshell_config::{Config, find_and_load_config_from};
use gitshell_git::{GitOptions, Repository};
use tracing::debug;

/// Shared state for a single CLI invocation.
#[derive(Debug)]
pub struct Context {
    /// The loaded configuration, or defaults if none was found.
    pub config: Config,
    /// The repository façade.
    pub repo: Repository,
}

impl Context {
    /// Loads configuration and opens the repository.
    ///
    /// An explicit directory wins over `repository.working_dir`; a relative
    /// configured directory is resolved against the search start.
    pub fn load(dir: Option<&Path>) -> Result<Self> {
        let start = match dir {
            Some(dir) => dir.to_path_buf(),
            None => std::env::current_dir().context("failed to read current directory")?,
        };

        let config = match find_and_load_config_from(&start) {
            Ok(config) => config,
            Err(err) if err.is_not_found() => {
                debug!("no configuration file found, using defaults");
                Config::default()
            }
            Err(err) => return Err(err).context("failed to load configuration"),
        };

        let working_dir =
            resolve_working_dir(dir, config.repository.working_dir.as_deref(), &start);
        debug!(dir = %working_dir.display(), "opening repository");

        let repo = Repository::new(GitOptions::new().working_dir(working_dir))
            .context("failed to open repository")?;

        Ok(Self { config, repo })
    }
}

fn resolve_working_dir(
    explicit: Option<&Path>,
    configured: Option<&Path>,
    start: &Path,
) -> PathBuf {
    match (explicit, configured) {
        (Some(dir), _) => dir.to_path_buf(),
        (None, Some(dir)) => start.join(dir),
        (None, None) => start.to_path_buf(),
    }
}

/// Formats a probe result for display.
pub(crate) fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
