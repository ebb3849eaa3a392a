//! Release value objects
//!
//! One release is created per deploy. Its identifier is the local wall-clock
//! time at second resolution, so identifiers sort in creation order.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use super::remote_path::{RemoteLayout, RemotePath};

/// `strftime` pattern of a release identifier
pub const RELEASE_ID_FORMAT: &str = "%Y%m%d%H%M%S";

/// Archive extension used locally and remotely
pub const ARCHIVE_EXTENSION: &str = "tar.gz";

/// Timestamp-derived release identifier (`YYYYMMDDHHMMSS`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReleaseId(String);

impl ReleaseId {
    pub fn from_datetime(at: NaiveDateTime) -> Self {
        Self(at.format(RELEASE_ID_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the archive for this release
    pub fn archive_name(&self) -> String {
        format!("{}.{}", self.0, ARCHIVE_EXTENSION)
    }
}

impl fmt::Display for ReleaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything one deploy needs to know about its release.
///
/// Lives for the duration of a single run; only its artifacts persist on
/// the remote host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    id: ReleaseId,
    archive_path: PathBuf,
    remote_archive: RemotePath,
    remote_dir: RemotePath,
}

impl Release {
    pub fn new(id: ReleaseId, work_dir: &Path, layout: &RemoteLayout) -> Self {
        let archive_name = id.archive_name();
        Self {
            archive_path: work_dir.join(&archive_name),
            remote_archive: layout.releases_dir.join(&archive_name),
            remote_dir: layout.releases_dir.join(id.as_str()),
            id,
        }
    }

    pub fn id(&self) -> &ReleaseId {
        &self.id
    }

    /// Local archive (`<workdir>/<id>.tar.gz`), deleted after upload
    pub fn archive_path(&self) -> &Path {
        &self.archive_path
    }

    /// Uploaded archive (`<releases_dir>/<id>.tar.gz`)
    pub fn remote_archive(&self) -> &RemotePath {
        &self.remote_archive
    }

    /// Extracted tree (`<releases_dir>/<id>`)
    pub fn remote_dir(&self) -> &RemotePath {
        &self.remote_dir
    }
}
