//! Relink - release-directory deployments over ssh
//!
//! Relink archives the committed state of a git working copy, uploads it
//! to a host as a timestamped release, unpacks it next to the previous
//! releases, repoints the `current` symlink and signals the running
//! service so its supervisor restarts it from the new code.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployOptions, DeployUseCase};
pub use config::Config;
pub use domain::value_objects::{Release, ReleaseId, RemoteLayout, RemotePath, Target};
pub use error::{RelinkError, RelinkResult};
