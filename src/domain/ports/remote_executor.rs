//! Remote Executor Port
//!
//! Runs shell commands on, and copies files to, the deploy target.
//! The orchestrator only talks to the remote host through this trait, so it
//! can be driven by a fake in tests or by a dry-run printer.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::value_objects::RemotePath;

/// Transport-level failure. A command that ran and exited non-zero is
/// reported through [`CommandOutput`] instead.
#[derive(Error, Debug)]
pub enum ExecError {
    /// The ssh/scp binary could not be started
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Could not reach or authenticate against the remote host
    #[error("connection to {destination} failed: {message}")]
    Connection {
        destination: String,
        message: String,
    },

    /// File copy did not complete
    #[error("transfer of {local} to {remote} failed: {message}")]
    Transfer {
        local: PathBuf,
        remote: String,
        message: String,
    },
}

/// Outcome of a remote command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code; `None` if the remote process was killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success() -> Self {
        Self {
            code: Some(0),
            ..Self::default()
        }
    }

    pub fn failure(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }

    /// Short human form of the exit status (`exit 1`, `signal`)
    pub fn status_label(&self) -> String {
        match self.code {
            Some(code) => format!("exit {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Remote command execution and file transfer
pub trait RemoteExecutor {
    /// Run a shell command on the remote host and wait for it
    fn run(&self, command: &str) -> Result<CommandOutput, ExecError>;

    /// Copy a local file to a remote path
    fn transfer(&self, local: &Path, remote: &RemotePath) -> Result<(), ExecError>;
}

impl<T: RemoteExecutor + ?Sized> RemoteExecutor for &T {
    fn run(&self, command: &str) -> Result<CommandOutput, ExecError> {
        (**self).run(command)
    }

    fn transfer(&self, local: &Path, remote: &RemotePath) -> Result<(), ExecError> {
        (**self).transfer(local, remote)
    }
}

impl<T: RemoteExecutor + ?Sized> RemoteExecutor for Box<T> {
    fn run(&self, command: &str) -> Result<CommandOutput, ExecError> {
        (**self).run(command)
    }

    fn transfer(&self, local: &Path, remote: &RemotePath) -> Result<(), ExecError> {
        (**self).transfer(local, remote)
    }
}
