//! Status command.

use anyhow::{Context as _, Result};
use clap::Args;

use super::{Context, yes_no};

/// Arguments for the status command.
#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Only set the exit status: success when the working tree is clean
    #[arg(short, long)]
    pub quiet: bool,
}

/// Runs the status command.
pub async fn run(ctx: &Context, args: &StatusArgs) -> Result<()> {
    let repo = &ctx.repo;

    let clean = repo.is_working_dir_clean().await;
    if args.quiet {
        if clean {
            return Ok(());
        }
        anyhow::bail!("working tree has uncommitted changes");
    }

    let branch = repo
        .get_current_branch_name()
        .await
        .context("failed to read current branch")?;
    let upstream = repo.has_upstream_branch().await;
    let unstaged = !repo.has_no_unstaged_changes().await;
    let staged = !repo.has_no_staged_changes().await;

    println!("branch:    {branch}");
    println!("upstream:  {}", yes_no(upstream));
    println!("unstaged:  {}", yes_no(unstaged));
    println!("staged:    {}", yes_no(staged));
    println!("clean:     {}", yes_no(clean));

    Ok(())
}
