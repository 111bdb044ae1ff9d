//! Git repository façade.

use std::path::{Path, PathBuf};

use gitshell_exec::{Executor, Invocation, ShellExecutor};
use tracing::debug;

use crate::args::{CommandLine, Targets};
use crate::branch::parse_default_branch;
use crate::flags::{
    BranchFlag, CheckoutFlag, CommitFlag, Flags, MergeFlag, ResetMode, RestoreFlag, TagFlag,
};
use crate::probe::probe;
use crate::push::{DEFAULT_REMOTE, PushTarget};
use crate::{GitError, GitResult};

/// Construction-time options for a [`Repository`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitOptions {
    /// Directory every command runs in. Defaults to the current directory.
    pub working_dir: Option<PathBuf>,
}

impl GitOptions {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the working directory.
    #[must_use]
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }
}

/// Typed façade over the `git` command line.
///
/// Each method composes one command line, runs it through the executor in
/// the configured working directory and maps the result. The working
/// directory never changes after construction.
#[derive(Debug)]
pub struct Repository<E = ShellExecutor> {
    working_dir: PathBuf,
    executor: E,
}

impl Repository<ShellExecutor> {
    /// Creates a repository façade that runs commands through the shell.
    ///
    /// # Errors
    ///
    /// Returns an error if no working directory is given and the current
    /// directory cannot be determined.
    pub fn new(options: GitOptions) -> GitResult<Self> {
        Self::with_executor(options, ShellExecutor::new())
    }

    /// Creates a repository façade rooted at the given path.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: path.into(),
            executor: ShellExecutor::new(),
        }
    }
}

impl<E: Executor> Repository<E> {
    /// Creates a repository façade with a custom executor.
    ///
    /// # Errors
    ///
    /// Returns an error if no working directory is given and the current
    /// directory cannot be determined.
    pub fn with_executor(options: GitOptions, executor: E) -> GitResult<Self> {
        let working_dir = match options.working_dir {
            Some(dir) => dir,
            None => std::env::current_dir().map_err(GitError::WorkingDir)?,
        };
        Ok(Self {
            working_dir,
            executor,
        })
    }

    /// Returns the directory commands run in.
    #[must_use]
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Returns the executor.
    #[must_use]
    pub fn executor(&self) -> &E {
        &self.executor
    }

    async fn run(&self, command: String) -> GitResult<String> {
        debug!(%command, "running git");
        let invocation = Invocation::new(command, &self.working_dir);
        Ok(self.executor.run(&invocation).await?)
    }

    /// Runs `git <args>` as given.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn exec(&self, args: &str) -> GitResult<String> {
        self.run(CommandLine::new(args).build()).await
    }

    // ------------------------------------------------------------------
    // State-changing operations returning self
    // ------------------------------------------------------------------

    /// Runs `git init`.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn init(&self) -> GitResult<&Self> {
        self.run(CommandLine::new("init").build()).await?;
        Ok(self)
    }

    /// Runs `git clone <url> [<dir>]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn clone(&self, url: &str, dir: Option<&str>) -> GitResult<&Self> {
        let command = CommandLine::new("clone").arg(url).opt_arg(dir).build();
        self.run(command).await?;
        Ok(self)
    }

    /// Runs `git checkout [flags] <target>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn checkout(
        &self,
        target: &str,
        flags: impl Into<Flags<CheckoutFlag>>,
    ) -> GitResult<&Self> {
        let command = CommandLine::new("checkout")
            .flags(&flags.into())
            .arg(target)
            .build();
        self.run(command).await?;
        Ok(self)
    }

    /// Runs `git commit -m "<message>"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn commit(&self, message: &str) -> GitResult<&Self> {
        self.commit_with(message, ()).await
    }

    /// Runs `git commit [flags] -m "<message>"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn commit_with(
        &self,
        message: &str,
        flags: impl Into<Flags<CommitFlag>>,
    ) -> GitResult<&Self> {
        let command = CommandLine::new("commit")
            .flags(&flags.into())
            .arg("-m")
            .message(message)
            .build();
        self.run(command).await?;
        Ok(self)
    }

    // ------------------------------------------------------------------
    // Text-returning operations
    // ------------------------------------------------------------------

    /// Runs `git add <paths>`; omitted paths mean `.`.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn add(&self, paths: impl Into<Targets>) -> GitResult<String> {
        let command = CommandLine::new("add").targets(&paths.into()).build();
        self.run(command).await
    }

    /// Runs `git reset [<mode>]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn reset(&self, mode: Option<ResetMode>) -> GitResult<String> {
        let command = CommandLine::new("reset")
            .flags(&Flags::<ResetMode>::from(mode))
            .build();
        self.run(command).await
    }

    /// Runs `git reset [<mode>] <target>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn reset_to(&self, mode: Option<ResetMode>, target: &str) -> GitResult<String> {
        let command = CommandLine::new("reset")
            .flags(&Flags::<ResetMode>::from(mode))
            .arg(target)
            .build();
        self.run(command).await
    }

    /// Runs `git restore [flags] <paths>`; omitted paths mean `.`.
    ///
    /// An explicit empty list passes no paths, so git refuses to run.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn restore(
        &self,
        paths: impl Into<Targets>,
        flags: impl Into<Flags<RestoreFlag>>,
    ) -> GitResult<String> {
        let command = CommandLine::new("restore")
            .flags(&flags.into())
            .targets(&paths.into())
            .build();
        self.run(command).await
    }

    /// Runs `git push [flags] <remote> [<branch>]`.
    ///
    /// Accepts `()`, a remote, a flag list, `(remote, branch)`,
    /// `(remote, flags)` or `(remote, branch, flags)`; see
    /// [`PushTarget::resolve`].
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn push(&self, target: impl Into<PushTarget>) -> GitResult<String> {
        self.run(target.into().command_line()).await
    }

    /// Runs `git fetch <remote>`, defaulting to `origin`.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn fetch(&self, remote: Option<&str>) -> GitResult<String> {
        let command = CommandLine::new("fetch")
            .arg(remote.unwrap_or(DEFAULT_REMOTE))
            .build();
        self.run(command).await
    }

    /// Runs `git tag [flags] <name>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn tag(&self, name: &str, flags: impl Into<Flags<TagFlag>>) -> GitResult<String> {
        let command = CommandLine::new("tag")
            .flags(&flags.into())
            .arg(name)
            .build();
        self.run(command).await
    }

    /// Runs `git tag -a <name> -m "<message>"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn annotated_tag(&self, name: &str, message: &str) -> GitResult<String> {
        let command = CommandLine::new("tag")
            .flags(&Flags::<TagFlag>::from(TagFlag::Annotate))
            .arg(name)
            .arg("-m")
            .message(message)
            .build();
        self.run(command).await
    }

    /// Runs `git merge [flags] <branch>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn merge(
        &self,
        branch: &str,
        flags: impl Into<Flags<MergeFlag>>,
    ) -> GitResult<String> {
        let command = CommandLine::new("merge")
            .flags(&flags.into())
            .arg(branch)
            .build();
        self.run(command).await
    }

    /// Runs `git branch [flags] <name>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn branch(
        &self,
        name: &str,
        flags: impl Into<Flags<BranchFlag>>,
    ) -> GitResult<String> {
        let command = CommandLine::new("branch")
            .flags(&flags.into())
            .arg(name)
            .build();
        self.run(command).await
    }

    /// Runs `git config --get <key>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unset or the command fails.
    pub async fn get_config(&self, key: &str) -> GitResult<String> {
        let command = CommandLine::new("config").arg("--get").arg(key).build();
        self.run(command).await
    }

    /// Runs `git config <key> "<value>"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn set_config(&self, key: &str, value: &str) -> GitResult<String> {
        let command = CommandLine::new("config").arg(key).message(value).build();
        self.run(command).await
    }

    /// Returns the configured `user.name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unset or the command fails.
    pub async fn get_user_name(&self) -> GitResult<String> {
        self.get_config("user.name").await
    }

    /// Returns the configured `user.email`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unset or the command fails.
    pub async fn get_user_email(&self) -> GitResult<String> {
        self.get_config("user.email").await
    }

    /// Returns the name of the checked-out branch.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn get_current_branch_name(&self) -> GitResult<String> {
        let command = CommandLine::new("rev-parse")
            .arg("--abbrev-ref")
            .arg("HEAD")
            .build();
        self.run(command).await
    }

    /// Returns the full hash of `HEAD`.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn get_head_commit(&self) -> GitResult<String> {
        self.run(CommandLine::new("rev-parse").arg("HEAD").build())
            .await
    }

    /// Returns the URL of a remote, defaulting to `origin`.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote does not exist or the command fails.
    pub async fn get_remote_url(&self, remote: Option<&str>) -> GitResult<String> {
        let command = CommandLine::new("remote")
            .arg("get-url")
            .arg(remote.unwrap_or(DEFAULT_REMOTE))
            .build();
        self.run(command).await
    }

    /// Infers the remote's default branch from `git branch -r`.
    ///
    /// Falls back to `main` when the listing has no symbolic HEAD line. This
    /// is a heuristic, not a property of the repository.
    ///
    /// # Errors
    ///
    /// Returns an error if listing remote branches fails.
    pub async fn get_default_branch_name(&self) -> GitResult<String> {
        let listing = self.run(CommandLine::new("branch").arg("-r").build()).await?;
        Ok(parse_default_branch(&listing))
    }

    // ------------------------------------------------------------------
    // Probes
    // ------------------------------------------------------------------

    /// Returns true if the working tree has no unstaged changes.
    pub async fn has_no_unstaged_changes(&self) -> bool {
        probe(self.run(CommandLine::new("diff").arg("--quiet").build())).await
    }

    /// Returns true if the index has no staged changes.
    pub async fn has_no_staged_changes(&self) -> bool {
        let command = CommandLine::new("diff")
            .arg("--cached")
            .arg("--quiet")
            .build();
        probe(self.run(command)).await
    }

    /// Returns true if the current branch has an upstream configured.
    pub async fn has_upstream_branch(&self) -> bool {
        let command = CommandLine::new("rev-parse")
            .arg("--abbrev-ref")
            .arg("--symbolic-full-name")
            .arg("@{u}")
            .build();
        probe(self.run(command)).await
    }

    /// Returns true if there are neither unstaged nor staged changes.
    ///
    /// The probes run one after the other.
    pub async fn is_working_dir_clean(&self) -> bool {
        self.has_no_unstaged_changes().await && self.has_no_staged_changes().await
    }
}
