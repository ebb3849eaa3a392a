//! Dry-run Remote Executor
//!
//! Prints what would be sent to the remote host and never connects.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use crate::domain::ports::{CommandOutput, ExecError, RemoteExecutor};
use crate::domain::value_objects::RemotePath;

/// Executor that only announces commands.
///
/// Probes (`test ...`) answer "absent" so the printed plan includes every
/// command a first deploy to an empty host would run.
pub struct DryRunExecutor {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl DryRunExecutor {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn stderr() -> Self {
        Self::with_writer(io::stderr())
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn announce(&self, line: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "[dry-run] {}", line);
            let _ = writer.flush();
        }
    }
}

impl RemoteExecutor for DryRunExecutor {
    fn run(&self, command: &str) -> Result<CommandOutput, ExecError> {
        self.announce(&format!("run: {}", command));
        if command.starts_with("test ") {
            return Ok(CommandOutput::failure(1, ""));
        }
        Ok(CommandOutput::success())
    }

    fn transfer(&self, local: &Path, remote: &RemotePath) -> Result<(), ExecError> {
        self.announce(&format!("put: {} -> {}", local.display(), remote));
        Ok(())
    }
}
