//! Execution error types.

use thiserror::Error;

/// Errors raised while running an invocation.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The subprocess could not be started.
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        /// The invocation string that was run.
        command: String,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The subprocess exited with a non-zero status.
    #[error("command `{command}` failed ({}): {stderr}", describe_code(.code))]
    Failed {
        /// The invocation string that was run.
        command: String,
        /// Exit code, if the process was not killed by a signal.
        code: Option<i32>,
        /// Standard error as written by the subprocess.
        stderr: String,
    },
}

#[allow(clippy::ref_option)]
fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

/// Result type for command execution.
pub type ExecResult<T> = Result<T, ExecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_display_includes_command_and_stderr() {
        let err = ExecError::Failed {
            command: "git checkout nope".to_string(),
            code: Some(1),
            stderr: "error: pathspec 'nope' did not match".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "command `git checkout nope` failed (exit code 1): error: pathspec 'nope' did not match"
        );
    }

    #[test]
    fn test_failed_display_without_code() {
        let err = ExecError::Failed {
            command: "git push".to_string(),
            code: None,
            stderr: String::new(),
        };
        assert_eq!(
            err.to_string(),
            "command `git push` failed (terminated by signal): "
        );
    }

    #[test]
    fn test_spawn_display() {
        let err = ExecError::Spawn {
            command: "git init".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "failed to spawn `git init`: no such file");
    }

    #[test]
    fn test_error_is_debug() {
        let err = ExecError::Failed {
            command: "git".to_string(),
            code: Some(128),
            stderr: String::new(),
        };
        let debug = format!("{err:?}");
        assert!(debug.contains("Failed"));
    }
}
