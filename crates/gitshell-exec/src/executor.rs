//! Subprocess execution.

use std::future::Future;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, instrument};

use crate::{ExecError, ExecResult, Invocation};

/// Runs invocations and returns their trimmed standard output.
///
/// Implementations have no knowledge of individual git operations; they only
/// see the composed command line and the working directory.
pub trait Executor: Send + Sync {
    /// Runs the invocation to completion.
    ///
    /// Resolves to standard output with leading and trailing whitespace
    /// removed when the process exits with status zero.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::Spawn`] if the process cannot be started and
    /// [`ExecError::Failed`] if it exits with a non-zero status.
    fn run(&self, invocation: &Invocation) -> impl Future<Output = ExecResult<String>> + Send;
}

/// Executor that hands the command line to `sh -c`.
///
/// Command lines are composed for a POSIX shell, so `sh` is required on
/// every platform (Git for Windows ships one). The full output is buffered;
/// there is no streaming, timeout or retry.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellExecutor;

impl ShellExecutor {
    /// Creates a new shell executor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Executor for ShellExecutor {
    #[instrument(
        skip(self, invocation),
        fields(command = %invocation.command(), dir = %invocation.working_dir().display())
    )]
    async fn run(&self, invocation: &Invocation) -> ExecResult<String> {
        let mut cmd = shell_command(invocation.command());
        cmd.current_dir(invocation.working_dir())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        debug!("spawning command");

        let output = cmd.output().await.map_err(|source| ExecError::Spawn {
            command: invocation.command().to_string(),
            source,
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            debug!(status = %output.status, %stderr, "command failed");
            return Err(ExecError::Failed {
                command: invocation.command().to_string(),
                code: output.status.code(),
                stderr,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!(bytes = stdout.len(), "command succeeded");
        Ok(stdout)
    }
}

fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn invocation(command: &str) -> (TempDir, Invocation) {
        let temp_dir = TempDir::new().unwrap();
        let invocation = Invocation::new(command, temp_dir.path());
        (temp_dir, invocation)
    }

    #[tokio::test]
    async fn test_stdout_is_trimmed() {
        let (_dir, inv) = invocation("printf '\\n  hello   world  \\n\\n'");
        let output = ShellExecutor::new().run(&inv).await.unwrap();
        assert_eq!(output, "hello   world");
    }

    #[tokio::test]
    async fn test_empty_output() {
        let (_dir, inv) = invocation("true");
        let output = ShellExecutor::new().run(&inv).await.unwrap();
        assert_eq!(output, "");
    }

    #[tokio::test]
    async fn test_runs_in_working_dir() {
        let (dir, inv) = invocation("pwd");
        let output = ShellExecutor::new().run(&inv).await.unwrap();
        assert_eq!(
            std::fs::canonicalize(output).unwrap(),
            std::fs::canonicalize(dir.path()).unwrap()
        );
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_failure() {
        let (_dir, inv) = invocation("echo 'not a repo' >&2; exit 3");
        let err = ShellExecutor::new().run(&inv).await.unwrap_err();
        match err {
            ExecError::Failed {
                command,
                code,
                stderr,
            } => {
                assert_eq!(command, "echo 'not a repo' >&2; exit 3");
                assert_eq!(code, Some(3));
                assert_eq!(stderr, "not a repo");
            }
            ExecError::Spawn { .. } => panic!("Expected Failed error"),
        }
    }

    #[tokio::test]
    async fn test_failure_message_names_command() {
        let (_dir, inv) = invocation("echo oops >&2; false");
        let err = ShellExecutor::new().run(&inv).await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("echo oops >&2; false"));
        assert!(message.contains("oops"));
    }

    #[tokio::test]
    async fn test_missing_working_dir_is_spawn_error() {
        let inv = Invocation::new("true", "/nonexistent/gitshell/dir");
        let err = ShellExecutor::new().run(&inv).await.unwrap_err();
        match err {
            ExecError::Spawn { command, .. } => assert_eq!(command, "true"),
            ExecError::Failed { .. } => panic!("Expected Spawn error"),
        }
    }

    #[tokio::test]
    async fn test_double_quote_escapes_reach_process_literally() {
        let (_dir, inv) = invocation(r#"printf '%s' "say \"hi\" \$HOME \`id\` a\\b""#);
        let output = ShellExecutor::new().run(&inv).await.unwrap();
        assert_eq!(output, r#"say "hi" $HOME `id` a\b"#);
    }
}
