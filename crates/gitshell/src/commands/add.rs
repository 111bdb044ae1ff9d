//! Add command.

use anyhow::{Context as _, Result};
use clap::Args;
use gitshell_git::Targets;
use tracing::info;

use super::Context;

/// Arguments for the add command.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Paths to stage (defaults to all)
    pub paths: Vec<String>,
}

impl AddArgs {
    /// Converts the paths, treating none at all as every path.
    pub fn targets(self) -> Targets {
        if self.paths.is_empty() {
            Targets::all()
        } else {
            Targets::from(self.paths)
        }
    }
}

/// Runs the add command.
pub async fn run(ctx: &Context, args: AddArgs) -> Result<()> {
    let count = args.paths.len();
    ctx.repo
        .add(args.targets())
        .await
        .context("failed to stage changes")?;
    info!(paths = count, "staged changes");
    Ok(())
}
