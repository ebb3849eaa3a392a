//! Source Archiver Port
//!
//! Produces a gzip-compressed tar of the committed source tree.

use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchiveError {
    /// git is not installed or not on PATH
    #[error("git is not available: {0}")]
    GitUnavailable(#[source] std::io::Error),

    /// `git archive` exited non-zero (bad revision, not a repository, ...)
    #[error("git archive of '{revision}' failed: {stderr}")]
    Git { revision: String, stderr: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Serializes one committed revision into a single `.tar.gz` file
pub trait SourceArchiver {
    /// Write the archive of `revision` to `dest`. Only committed content
    /// is archived; uncommitted working-tree changes are not included.
    fn archive(&self, revision: &str, dest: &Path) -> Result<(), ArchiveError>;
}

impl<T: SourceArchiver + ?Sized> SourceArchiver for &T {
    fn archive(&self, revision: &str, dest: &Path) -> Result<(), ArchiveError> {
        (**self).archive(revision, dest)
    }
}

impl<T: SourceArchiver + ?Sized> SourceArchiver for Box<T> {
    fn archive(&self, revision: &str, dest: &Path) -> Result<(), ArchiveError> {
        (**self).archive(revision, dest)
    }
}
