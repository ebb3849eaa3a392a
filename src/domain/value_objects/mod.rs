//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod release;
mod remote_path;
mod target;

pub use config_warning::ConfigWarning;
pub use release::{Release, ReleaseId, ARCHIVE_EXTENSION, RELEASE_ID_FORMAT};
pub use remote_path::{shell_quote, RemoteLayout, RemotePath};
pub use target::{Target, DEFAULT_SSH_PORT};
