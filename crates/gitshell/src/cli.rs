//! CLI definition.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::commands;

/// Typed git automation from the command line.
#[derive(Debug, Parser)]
#[command(name = "gitshell")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Repository directory (defaults to the configured or current directory)
    #[arg(short = 'C', long, global = true, env = "GITSHELL_DIR")]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show branch, upstream and cleanliness of the working tree
    Status(commands::status::StatusArgs),

    /// Print the current branch name
    CurrentBranch,

    /// Print the remote's default branch name
    DefaultBranch,

    /// Print a git configuration value
    Config(commands::config::ConfigArgs),

    /// Stage paths (all paths if none are given)
    Add(commands::add::AddArgs),

    /// Record a commit
    Commit(commands::commit::CommitArgs),

    /// Push to a remote
    Push(commands::push::PushArgs),

    /// Create a tag
    Tag(commands::tag::TagArgs),
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        let rt = tokio::runtime::Runtime::new().context("failed to create async runtime")?;
        rt.block_on(self.run_async())
    }

    async fn run_async(self) -> Result<()> {
        let ctx = commands::Context::load(self.dir.as_deref())?;

        match self.command {
            Commands::Status(args) => commands::status::run(&ctx, &args).await,
            Commands::CurrentBranch => commands::branch::current(&ctx).await,
            Commands::DefaultBranch => commands::branch::default(&ctx).await,
            Commands::Config(args) => commands::config::run(&ctx, &args).await,
            Commands::Add(args) => commands::add::run(&ctx, args).await,
            Commands::Commit(args) => commands::commit::run(&ctx, &args).await,
            Commands::Push(args) => commands::push::run(&ctx, args).await,
            Commands::Tag(args) => commands::tag::run(&ctx, &args).await,
        }
    }
}
