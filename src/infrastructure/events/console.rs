//! Console Event Sink
//!
//! Human-readable deploy progress, one line per event.

use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::style::Stylize;

use crate::domain::ports::{DeployEvent, DeployEventSink};

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    color: bool,
    detailed: bool,
}

impl ConsoleEventSink {
    pub fn stdout(color: bool) -> Self {
        Self::with_writer(io::stdout(), color)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, color: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            color,
            detailed: true,
        }
    }

    /// Hide per-command lines (the dry-run executor prints those itself)
    pub fn summary_only(mut self) -> Self {
        self.detailed = false;
        self
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
            let _ = writer.flush();
        }
    }

    fn ok_mark(&self) -> String {
        if self.color {
            "✓".green().to_string()
        } else {
            "✓".to_string()
        }
    }

    fn fail_mark(&self) -> String {
        if self.color {
            "✗".red().to_string()
        } else {
            "✗".to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            text.dim().to_string()
        } else {
            text.to_string()
        }
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        match event {
            DeployEvent::Started {
                release,
                target,
                revision,
            } => self.line(format!(
                "Deploying {} as release {} to {}",
                revision, release, target
            )),
            DeployEvent::RemoteCommand { command } => {
                self.line(format!("  {} {}", self.dim("run:"), command))
            }
            DeployEvent::Transfer { local, remote } => self.line(format!(
                "  {} {} -> {}",
                self.dim("put:"),
                local.display(),
                remote
            )),
            DeployEvent::StageCompleted { stage } => {
                self.line(format!("{} {}", self.ok_mark(), stage))
            }
            DeployEvent::Completed { release } => {
                self.line(format!("Release {} is live", release))
            }
            DeployEvent::Failed { stage, .. } => self.line(format!(
                "{} aborted after stage '{}'",
                self.fail_mark(),
                stage
            )),
            DeployEvent::RestartStarted { target } => match target {
                Some(target) => self.line(format!("Restarting service on {}", target)),
                None => self.line("Restarting service".to_string()),
            },
            DeployEvent::RestartCompleted => self.line("Service restarted".to_string()),
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.detailed
    }
}
