//! Configuration module for Relink
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (RELINK_*)
//! 3. `--config` file, else `./relink.toml`, else `~/.config/relink/config.toml`
//! 4. Built-in defaults (lowest priority)
//!
//! The resolved `Config` is built once at startup and only ever borrowed.

mod loader;
pub mod suggest;
mod types;

pub use crate::domain::value_objects::ConfigWarning;
pub use loader::{
    discover, load_from, load_with_warnings, with_env_overrides, ConfigOverrides,
    PROJECT_CONFIG_FILE,
};
pub use types::{Config, RemoteConfig, SourceConfig, TargetConfig};
