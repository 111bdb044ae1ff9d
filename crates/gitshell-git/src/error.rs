//! Git error types.

use thiserror::Error;

/// Git-related errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// The working directory could not be determined.
    #[error("cannot determine working directory: {0}")]
    WorkingDir(#[source] std::io::Error),

    /// A git command failed or could not be started.
    #[error(transparent)]
    Exec(#[from] gitshell_exec::ExecError),
}

/// Result type for git operations.
pub type GitResult<T> = Result<T, GitError>;
