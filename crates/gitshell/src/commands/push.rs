//! Push command.

use anyhow::{Context as _, Result};
use clap::Args;
use gitshell_git::{Flags, PushArg, PushFlag, PushTarget};
use tracing::info;

use super::Context;

/// Arguments for the push command.
#[derive(Debug, Args)]
pub struct PushArgs {
    /// Remote to push to (defaults to `push.remote` from configuration)
    pub remote: Option<String>,

    /// Branch to push
    pub branch: Option<String>,

    /// Force the update
    #[arg(short, long)]
    pub force: bool,

    /// Push tags as well
    #[arg(long)]
    pub tags: bool,

    /// Set the pushed branch as upstream
    #[arg(short = 'u', long)]
    pub set_upstream: bool,

    /// Show what would be pushed without pushing
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

impl PushArgs {
    fn flags(&self) -> Flags<PushFlag> {
        [
            (self.force, PushFlag::Force),
            (self.tags, PushFlag::Tags),
            (self.set_upstream, PushFlag::SetUpstream),
            (self.dry_run, PushFlag::DryRun),
        ]
        .into_iter()
        .filter_map(|(set, flag)| set.then_some(flag))
        .collect::<Vec<_>>()
        .into()
    }

    fn into_target(self, default_remote: &str) -> PushTarget {
        let flags = self.flags();
        let remote = self.remote.unwrap_or_else(|| default_remote.to_string());
        PushTarget::resolve(
            Some(PushArg::Name(remote)),
            self.branch.map(PushArg::Name),
            flags,
        )
    }
}

/// Runs the push command.
pub async fn run(ctx: &Context, args: PushArgs) -> Result<()> {
    let target = args.into_target(&ctx.config.push.remote);
    info!(remote = %target.remote, branch = ?target.branch, "pushing");

    ctx.repo.push(target).await.context("failed to push")?;
    Ok(())
}
