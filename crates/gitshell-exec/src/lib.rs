//! Command execution layer for gitshell.
//!
//! Every git operation ends up here as a single [`Invocation`]: a fully
//! composed command line plus the directory it runs in. An [`Executor`]
//! turns it into trimmed standard output or an [`ExecError`].

mod error;
mod executor;
mod invocation;

pub use error::{ExecError, ExecResult};
pub use executor::{Executor, ShellExecutor};
pub use invocation::Invocation;
