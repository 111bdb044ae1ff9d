//! Scripted executor for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use gitshell_exec::{ExecError, ExecResult, Executor, Invocation};

/// Records every invocation and replies from a queue.
///
/// When the queue is empty, every call succeeds with empty output.
#[derive(Debug, Default)]
pub(crate) struct RecordingExecutor {
    calls: Mutex<Vec<Invocation>>,
    replies: Mutex<VecDeque<ExecResult<String>>>,
}

impl RecordingExecutor {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(self, output: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(output.to_string()));
        self
    }

    pub(crate) fn fail(self, stderr: &str) -> Self {
        self.replies.lock().unwrap().push_back(Err(ExecError::Failed {
            command: String::new(),
            code: Some(1),
            stderr: stderr.to_string(),
        }));
        self
    }

    pub(crate) fn commands(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|call| call.command().to_string())
            .collect()
    }

    pub(crate) fn last_invocation(&self) -> Option<Invocation> {
        self.calls.lock().unwrap().last().cloned()
    }
}

impl Executor for RecordingExecutor {
    async fn run(&self, invocation: &Invocation) -> ExecResult<String> {
        self.calls.lock().unwrap().push(invocation.clone());
        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(Err(ExecError::Failed { code, stderr, .. })) => Err(ExecError::Failed {
                command: invocation.command().to_string(),
                code,
                stderr,
            }),
            Some(reply) => reply,
            None => Ok(String::new()),
        }
    }
}
