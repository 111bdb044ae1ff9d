//! Typed git command façade for gitshell.
//!
//! This crate provides:
//! - [`Repository`], one async method per supported git operation
//! - Closed flag enumerations per operation
//! - Argument normalization and message quoting
//! - Fail-soft probes for "does this hold" questions
//! - Default branch inference from `git branch -r`

mod args;
mod branch;
mod error;
mod flags;
mod probe;
mod push;
mod repository;

#[cfg(test)]
mod test_support;

pub use args::{Targets, quote};
pub use branch::{DEFAULT_BRANCH_FALLBACK, parse_default_branch};
pub use error::{GitError, GitResult};
pub use flags::{
    BranchFlag, CheckoutFlag, CommitFlag, Flag, Flags, MergeFlag, PushFlag, ResetMode,
    RestoreFlag, TagFlag,
};
pub use gitshell_exec::{ExecError, Executor, Invocation, ShellExecutor};
pub use probe::probe;
pub use push::{DEFAULT_REMOTE, PushArg, PushTarget};
pub use repository::{GitOptions, Repository};
