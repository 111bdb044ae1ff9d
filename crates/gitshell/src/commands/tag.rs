//! Tag command.

use anyhow::{Context as _, Result};
use clap::Args;
use gitshell_git::TagFlag;
use tracing::info;

use super::Context;

/// Arguments for the tag command.
#[derive(Debug, Args)]
pub struct TagArgs {
    /// Tag name
    pub name: String,

    /// Create an annotated tag with this message
    #[arg(short, long)]
    pub message: Option<String>,

    /// Replace an existing tag
    #[arg(short, long, conflicts_with = "message")]
    pub force: bool,
}

/// Runs the tag command.
pub async fn run(ctx: &Context, args: &TagArgs) -> Result<()> {
    let result = match (&args.message, args.force) {
        (Some(message), _) => ctx.repo.annotated_tag(&args.name, message).await,
        (None, true) => ctx.repo.tag(&args.name, TagFlag::Force).await,
        (None, false) => ctx.repo.tag(&args.name, ()).await,
    };
    result.with_context(|| format!("failed to create tag {}", args.name))?;

    info!(tag = %args.name, "created tag");
    Ok(())
}
