//! Error types for Relink
//!
//! Library code returns `RelinkError`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{ArchiveError, ExecError};

/// Result type alias for Relink operations
pub type RelinkResult<T> = Result<T, RelinkError>;

/// Main error type for Relink operations
#[derive(Error, Debug)]
pub enum RelinkError {
    /// Config file exists but could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// `--config` pointed at a file that is not there
    #[error("configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// An operation needs a target but none was configured
    #[error("no target host configured (set [target] host, RELINK_HOST or --host)")]
    MissingHost,

    /// Host string could not be split into host and port
    #[error("invalid target host '{value}': {reason}")]
    InvalidHost { value: String, reason: String },

    /// Source archive could not be produced
    #[error("archive failed: {0}")]
    Archive(#[from] ArchiveError),

    /// Transport-level failure (ssh/scp could not run or connect)
    #[error(transparent)]
    Remote(#[from] ExecError),

    /// Remote command ran but exited non-zero
    #[error("remote command failed ({status}): {command}{}", stderr_suffix(.stderr))]
    RemoteCommand {
        command: String,
        status: String,
        stderr: String,
    },

    /// Local archive could not be removed after the upload
    #[error("failed to remove local archive {path}: {source}")]
    LocalCleanup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Operation name not in the registry
    #[error("unknown operation '{name}'{}", suggestion_suffix(.suggestion))]
    UnknownOperation {
        name: String,
        suggestion: Option<String>,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("\n{}", trimmed)
    }
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(". Did you mean '{}'?", s),
        None => String::new(),
    }
}
