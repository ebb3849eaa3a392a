//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    /// Operation the events belong to (`deploy`, `restart`)
    command: &'static str,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(io::stdout(), command)
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W, command: &'static str) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            command,
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let command = self.command;
        let json = match event {
            DeployEvent::Started {
                release,
                target,
                revision,
            } => serde_json::json!({
                "event": "start",
                "command": command,
                "release": release,
                "target": target,
                "revision": revision,
            }),

            DeployEvent::RemoteCommand { command: remote } => serde_json::json!({
                "event": "run",
                "command": command,
                "remote_command": remote,
            }),

            DeployEvent::Transfer { local, remote } => serde_json::json!({
                "event": "put",
                "command": command,
                "local": local.display().to_string(),
                "remote": remote,
            }),

            DeployEvent::StageCompleted { stage } => serde_json::json!({
                "event": "stage",
                "command": command,
                "stage": stage.as_str(),
            }),

            DeployEvent::Completed { release } => serde_json::json!({
                "event": "complete",
                "command": command,
                "status": "success",
                "release": release,
            }),

            DeployEvent::Failed { stage, error } => serde_json::json!({
                "event": "complete",
                "command": command,
                "status": "failed",
                "stage": stage.as_str(),
                "error": error,
            }),

            DeployEvent::RestartStarted { target } => serde_json::json!({
                "event": "start",
                "command": command,
                "target": target,
            }),

            DeployEvent::RestartCompleted => serde_json::json!({
                "event": "complete",
                "command": command,
                "status": "success",
            }),
        };

        self.write_event(json);
    }
}
