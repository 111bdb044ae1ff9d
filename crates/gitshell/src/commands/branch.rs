//! Branch query commands.

use anyhow::{Context as _, Result};

use super::Context;

/// Prints the current branch name.
pub async fn current(ctx: &Context) -> Result<()> {
    let branch = ctx
        .repo
        .get_current_branch_name()
        .await
        .context("failed to read current branch")?;
    println!("{branch}");
    Ok(())
}

/// Prints the remote's default branch name.
pub async fn default(ctx: &Context) -> Result<()> {
    let branch = ctx
        .repo
        .get_default_branch_name()
        .await
        .context("failed to list remote branches")?;
    println!("{branch}");
    Ok(())
}
