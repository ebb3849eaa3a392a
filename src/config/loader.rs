//! Configuration discovery, loading and overrides

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::value_objects::ConfigWarning;
use crate::error::{RelinkError, RelinkResult};

use super::suggest::closest_match;
use super::types::Config;

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "relink.toml";

/// Every key the config schema knows, as dotted paths
const KNOWN_KEYS: &[&str] = &[
    "target",
    "target.host",
    "target.user",
    "remote",
    "remote.releases_dir",
    "remote.current_link",
    "remote.pid_file",
    "remote.signal",
    "source",
    "source.revision",
];

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> RelinkResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

fn parse_with_warnings(content: &str, path: &Path) -> RelinkResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| RelinkError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key| {
            let leaf = key.rsplit('.').next().unwrap_or(key.as_str()).to_string();
            ConfigWarning {
                line: find_line_number(content, &leaf),
                suggestion: closest_match(&key, KNOWN_KEYS.iter().copied()).map(str::to_string),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Pick the config file to read, if any.
///
/// An explicit path wins and must exist. Otherwise `./relink.toml`, then
/// `<user config dir>/relink/config.toml`.
pub fn discover(
    explicit: Option<&Path>,
    project_dir: &Path,
    user_config_dir: Option<&Path>,
) -> RelinkResult<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(RelinkError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        return Ok(Some(path.to_path_buf()));
    }

    let project = project_dir.join(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return Ok(Some(project));
    }

    if let Some(dir) = user_config_dir {
        let user = dir.join("relink").join("config.toml");
        if user.is_file() {
            return Ok(Some(user));
        }
    }

    Ok(None)
}

/// Load the discovered config file, or defaults if there is none.
///
/// Returns the config, its warnings and the file it came from.
pub fn load_from(
    explicit: Option<&Path>,
    project_dir: &Path,
) -> RelinkResult<(Config, Vec<ConfigWarning>, Option<PathBuf>)> {
    let user_dir = dirs::config_dir();
    match discover(explicit, project_dir, user_dir.as_deref())? {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration");
            let (config, warnings) = load_with_warnings(&path)?;
            Ok((config, warnings, Some(path)))
        }
        None => {
            debug!("no configuration file found, using defaults");
            Ok((Config::default(), Vec::new(), None))
        }
    }
}

/// Apply environment variable overrides (RELINK_* prefix)
pub fn with_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(host) = get("RELINK_HOST") {
        config.target.host = Some(host);
    }
    if let Some(user) = get("RELINK_USER") {
        config.target.user = Some(user);
    }
    if let Some(pid_file) = get("RELINK_PID_FILE") {
        config.remote.pid_file = pid_file;
    }
    if let Some(revision) = get("RELINK_REVISION") {
        config.source.revision = revision;
    }

    config
}

/// Values given on the command line; these beat everything else.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub user: Option<String>,
    pub revision: Option<String>,
}

impl ConfigOverrides {
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(host) = &self.host {
            config.target.host = Some(host.clone());
        }
        if let Some(user) = &self.user {
            config.target.user = Some(user.clone());
        }
        if let Some(revision) = &self.revision {
            config.source.revision = revision.clone();
        }
        config
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            let line = line.trim_start();
            line.starts_with(needle) && line[needle.len()..].trim_start().starts_with('=')
        })
        .map(|i| i + 1)
}

#[cfg(test)]
pub(super) fn parse_for_test(content: &str) -> RelinkResult<(Config, Vec<ConfigWarning>)> {
    parse_with_warnings(content, Path::new("relink.toml"))
}
