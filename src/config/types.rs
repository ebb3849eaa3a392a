//! Configuration type definitions

use serde::Deserialize;

use crate::domain::value_objects::{RemoteLayout, RemotePath, Target};
use crate::error::{RelinkError, RelinkResult};

/// `[target]` - where to deploy
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct TargetConfig {
    /// Host with optional embedded port (`host:2222`)
    #[serde(default)]
    pub host: Option<String>,

    /// Login user; ssh picks its own default when absent
    #[serde(default)]
    pub user: Option<String>,
}

/// `[remote]` - layout on the target host
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RemoteConfig {
    #[serde(default = "default_releases_dir")]
    pub releases_dir: String,

    #[serde(default = "default_current_link")]
    pub current_link: String,

    #[serde(default = "default_pid_file")]
    pub pid_file: String,

    /// Signal sent to the service on restart, as accepted by `kill -<sig>`
    #[serde(default = "default_signal")]
    pub signal: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            releases_dir: default_releases_dir(),
            current_link: default_current_link(),
            pid_file: default_pid_file(),
            signal: default_signal(),
        }
    }
}

fn default_releases_dir() -> String {
    "~/releases".to_string()
}

fn default_current_link() -> String {
    "~/current".to_string()
}

fn default_pid_file() -> String {
    "lighttpd.pid".to_string()
}

fn default_signal() -> String {
    "9".to_string()
}

/// `[source]` - what gets archived
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SourceConfig {
    /// Committed revision passed to `git archive`
    #[serde(default = "default_revision")]
    pub revision: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            revision: default_revision(),
        }
    }
}

fn default_revision() -> String {
    "HEAD".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub target: TargetConfig,

    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub source: SourceConfig,
}

impl Config {
    /// Resolve the deploy target. Fails if no host is configured.
    pub fn resolve_target(&self) -> RelinkResult<Target> {
        let host = self
            .target
            .host
            .as_deref()
            .filter(|h| !h.trim().is_empty())
            .ok_or(RelinkError::MissingHost)?;
        Target::parse(host, self.target.user.clone())
    }

    /// Remote filesystem layout
    pub fn layout(&self) -> RemoteLayout {
        RemoteLayout {
            releases_dir: RemotePath::new(self.remote.releases_dir.as_str()),
            current_link: RemotePath::new(self.remote.current_link.as_str()),
            pid_file: RemotePath::new(self.remote.pid_file.as_str()),
        }
    }

    /// Restart signal without any leading dash (`-9` and `9` are the same)
    pub fn signal(&self) -> &str {
        let signal = self.remote.signal.trim().trim_start_matches('-');
        if signal.is_empty() {
            "9"
        } else {
            signal
        }
    }
}
