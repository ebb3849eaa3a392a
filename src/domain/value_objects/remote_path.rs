//! Remote path value object
//!
//! Remote paths are kept as plain strings because they name files on
//! another host. A leading `~` means the remote login directory and has to
//! survive shell quoting, so rendering quotes only what follows `~/`.

use std::fmt;

/// Path on the remote host, possibly relative to the remote home (`~`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RemotePath(String);

impl RemotePath {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            // "/" stays root, "" stays empty
            return Self(path.chars().take(1).collect());
        }
        Self(trimmed.to_string())
    }

    /// Append a single path component
    pub fn join(&self, component: &str) -> Self {
        let component = component.trim_matches('/');
        if self.0.is_empty() {
            Self(component.to_string())
        } else if self.0 == "/" {
            Self(format!("/{}", component))
        } else {
            Self(format!("{}/{}", self.0, component))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Render as one shell word, keeping `~` expansion intact.
    ///
    /// `~/releases/x` becomes `~/'releases/x'`, `/srv/app` becomes `'/srv/app'`.
    pub fn to_shell(&self) -> String {
        if self.0 == "~" {
            return "~".to_string();
        }
        match self.0.strip_prefix("~/") {
            Some(rest) => format!("~/{}", shell_quote(rest)),
            None => shell_quote(&self.0),
        }
    }

    /// Path as scp expects it after `host:`. Home-relative paths lose the
    /// `~/` prefix since scp resolves relative paths against the login
    /// directory.
    pub fn to_scp(&self) -> String {
        if self.0 == "~" {
            return ".".to_string();
        }
        match self.0.strip_prefix("~/") {
            Some(rest) => rest.to_string(),
            None => self.0.clone(),
        }
    }
}

impl fmt::Display for RemotePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RemotePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Quote a string for POSIX sh
pub fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

/// Where releases live on the remote host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteLayout {
    /// Directory holding one subdirectory (and one archive) per release
    pub releases_dir: RemotePath,
    /// Symlink pointing at the live release
    pub current_link: RemotePath,
    /// File holding the PID of the service to signal on restart
    pub pid_file: RemotePath,
}

impl Default for RemoteLayout {
    fn default() -> Self {
        Self {
            releases_dir: RemotePath::new("~/releases"),
            current_link: RemotePath::new("~/current"),
            pid_file: RemotePath::new("lighttpd.pid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_rendering_keeps_tilde_outside_quotes() {
        let p = RemotePath::new("~/releases").join("20240102030405");
        assert_eq!(p.as_str(), "~/releases/20240102030405");
        assert_eq!(p.to_shell(), "~/'releases/20240102030405'");
    }

    #[test]
    fn shell_rendering_quotes_absolute_paths() {
        assert_eq!(RemotePath::new("/srv/my app").to_shell(), "'/srv/my app'");
        assert_eq!(RemotePath::new("it's").to_shell(), "'it'\\''s'");
        assert_eq!(RemotePath::new("~").to_shell(), "~");
    }

    #[test]
    fn scp_rendering_is_home_relative() {
        assert_eq!(RemotePath::new("~/releases/").to_scp(), "releases");
        assert_eq!(RemotePath::new("~").to_scp(), ".");
        assert_eq!(RemotePath::new("/srv/releases").to_scp(), "/srv/releases");
    }

    #[test]
    fn new_trims_trailing_slashes() {
        assert_eq!(RemotePath::new("~/releases//").as_str(), "~/releases");
        assert_eq!(RemotePath::new("/").as_str(), "/");
        assert_eq!(RemotePath::new("/").join("srv").as_str(), "/srv");
    }

    #[test]
    fn default_layout_matches_conventional_paths() {
        let layout = RemoteLayout::default();
        assert_eq!(layout.releases_dir.as_str(), "~/releases");
        assert_eq!(layout.current_link.as_str(), "~/current");
        assert_eq!(layout.pid_file.as_str(), "lighttpd.pid");
    }
}
