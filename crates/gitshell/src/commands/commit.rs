//! Commit command.

use anyhow::{Context as _, Result};
use clap::Args;
use gitshell_git::{CommitFlag, Flags};
use tracing::info;

use super::Context;

/// Arguments for the commit command.
#[derive(Debug, Args)]
pub struct CommitArgs {
    /// Commit message
    #[arg(short, long)]
    pub message: String,

    /// Stage modified and deleted files before committing
    #[arg(short, long)]
    pub all: bool,

    /// Amend the previous commit
    #[arg(long)]
    pub amend: bool,

    /// Allow a commit with no changes
    #[arg(long)]
    pub allow_empty: bool,

    /// Skip commit hooks
    #[arg(long)]
    pub no_verify: bool,
}

impl CommitArgs {
    fn flags(&self) -> Flags<CommitFlag> {
        [
            (self.all, CommitFlag::All),
            (self.amend, CommitFlag::Amend),
            (self.allow_empty, CommitFlag::AllowEmpty),
            (self.no_verify, CommitFlag::NoVerify),
        ]
        .into_iter()
        .filter_map(|(set, flag)| set.then_some(flag))
        .collect::<Vec<_>>()
        .into()
    }
}

/// Runs the commit command.
pub async fn run(ctx: &Context, args: &CommitArgs) -> Result<()> {
    ctx.repo
        .commit_with(&args.message, args.flags())
        .await
        .context("failed to commit")?;

    let head = ctx.repo.get_head_commit().await.context("failed to read HEAD")?;
    info!(commit = %head, "created commit");
    println!("{head}");
    Ok(())
}
