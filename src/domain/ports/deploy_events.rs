//! Deploy Event Port
//!
//! Provides an observable interface for deploy operations.
//! Enables progress reporting, JSON event streams, and debugging.

use std::fmt;
use std::path::PathBuf;

/// Position in the deploy pipeline. Stages only move forward; a failure
/// leaves the run at the last stage it completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeployStage {
    Init,
    Archived,
    Uploaded,
    Extracted,
    Linked,
    Restarted,
    Done,
}

impl DeployStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeployStage::Init => "init",
            DeployStage::Archived => "archived",
            DeployStage::Uploaded => "uploaded",
            DeployStage::Extracted => "extracted",
            DeployStage::Linked => "linked",
            DeployStage::Restarted => "restarted",
            DeployStage::Done => "done",
        }
    }
}

impl fmt::Display for DeployStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event emitted during deploy operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// Deploy started
    Started {
        release: String,
        target: String,
        revision: String,
    },

    /// A command is about to run on the remote host
    RemoteCommand { command: String },

    /// A file is about to be copied to the remote host
    Transfer { local: PathBuf, remote: String },

    /// Pipeline reached a new stage
    StageCompleted { stage: DeployStage },

    /// Deploy completed; `release` is now live
    Completed { release: String },

    /// Run aborted; `stage` is the last stage completed
    Failed { stage: DeployStage, error: String },

    /// Standalone restart started; `target` is unknown in a hostless dry run
    RestartStarted { target: Option<String> },

    /// Standalone restart signalled the service
    RestartCompleted,
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - ConsoleEventSink: Progress display in terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait DeployEventSink {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);

    /// Whether per-command events (`RemoteCommand`, `Transfer`) are wanted
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
