//! Git Source Archiver
//!
//! Streams `git archive --format=tar <revision>` through an in-process gzip
//! encoder. Only committed content ends up in the archive. The output is
//! written to a temporary file next to the destination and renamed into
//! place once complete.

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use flate2::write::GzEncoder;
use flate2::Compression;
use tracing::debug;

use crate::domain::ports::{ArchiveError, SourceArchiver};

/// Archiver for a git working copy
pub struct GitArchiver {
    repo_dir: PathBuf,
    git_program: String,
}

impl GitArchiver {
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: repo_dir.into(),
            git_program: "git".to_string(),
        }
    }

    /// Use a different git binary
    pub fn with_git_program(mut self, program: impl Into<String>) -> Self {
        self.git_program = program.into();
        self
    }
}

impl SourceArchiver for GitArchiver {
    fn archive(&self, revision: &str, dest: &Path) -> Result<(), ArchiveError> {
        if revision.is_empty() || revision.starts_with('-') {
            return Err(ArchiveError::Git {
                revision: revision.to_string(),
                stderr: "invalid revision".to_string(),
            });
        }

        let dir = dest
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;

        debug!(repo = %self.repo_dir.display(), revision, "git archive");
        let mut child = Command::new(&self.git_program)
            .arg("-C")
            .arg(&self.repo_dir)
            .args(["archive", "--format=tar", revision])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => ArchiveError::GitUnavailable(e),
                _ => ArchiveError::Io(e),
            })?;

        // Drain stderr on its own thread so a chatty git cannot block on it
        let stderr_reader = child.stderr.take().map(|mut stderr| {
            std::thread::spawn(move || {
                let mut buf = String::new();
                let _ = stderr.read_to_string(&mut buf);
                buf
            })
        });

        let copied = match child.stdout.take() {
            Some(mut stdout) => {
                let mut encoder = GzEncoder::new(&mut tmp, Compression::default());
                io::copy(&mut stdout, &mut encoder).and_then(|_| encoder.finish().map(|_| ()))
            }
            None => Ok(()),
        };

        if let Err(e) = copied {
            let _ = child.kill();
            let _ = child.wait();
            return Err(ArchiveError::Io(e));
        }

        let status = child.wait()?;
        let stderr = stderr_reader
            .and_then(|handle| handle.join().ok())
            .unwrap_or_default();

        if !status.success() {
            return Err(ArchiveError::Git {
                revision: revision.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        tmp.persist(dest).map_err(|e| ArchiveError::Io(e.error))?;
        debug!(path = %dest.display(), "archive written");
        Ok(())
    }
}
