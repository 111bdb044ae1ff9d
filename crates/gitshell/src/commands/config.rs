//! Config command.

use anyhow::{Context as _, Result};
use clap::Args;

use super::Context;

/// Arguments for the config command.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Configuration key, e.g. `user.name`
    pub key: String,
}

/// Runs the config command.
pub async fn run(ctx: &Context, args: &ConfigArgs) -> Result<()> {
    let value = ctx
        .repo
        .get_config(&args.key)
        .await
        .with_context(|| format!("failed to read {}", args.key))?;
    println!("{value}");
    Ok(())
}
