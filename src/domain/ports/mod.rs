//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod deploy_events;
pub mod remote_executor;
pub mod source_archiver;

pub use deploy_events::{DeployEvent, DeployEventSink, DeployStage, NoopEventSink};
pub use remote_executor::{CommandOutput, ExecError, RemoteExecutor};
pub use source_archiver::{ArchiveError, SourceArchiver};
