//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `archive/` - Source archivers (git)
//! - `remote/` - Remote executors (ssh/scp, dry run)
//! - `events/` - Deploy event sinks (console, JSON)

pub mod archive;
pub mod events;
pub mod remote;

// Re-export for convenience
pub use archive::GitArchiver;
pub use events::{ConsoleEventSink, JsonEventSink};
pub use remote::{DryRunExecutor, SshExecutor};
