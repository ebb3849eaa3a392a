//! Remote shell commands issued by the deploy pipeline.
//!
//! Every path goes through `RemotePath::to_shell`, so `~` still expands on
//! the remote side while the rest of the path is quoted.

use crate::domain::value_objects::{shell_quote, Release, RemotePath};

/// Exit 0 iff `path` is a directory
pub fn dir_exists(path: &RemotePath) -> String {
    format!("test -d {}", path.to_shell())
}

pub fn make_dir(path: &RemotePath) -> String {
    format!("mkdir {}", path.to_shell())
}

/// Exit 0 iff `path` is a symlink (dangling or not)
pub fn link_exists(path: &RemotePath) -> String {
    format!("test -L {}", path.to_shell())
}

pub fn remove_link(path: &RemotePath) -> String {
    format!("rm {}", path.to_shell())
}

/// Create the release directory and unpack the uploaded archive into it.
///
/// The archive sits next to the release directory, so it is referenced
/// relative to it; this holds for home-relative and absolute layouts.
pub fn extract(release: &Release) -> String {
    let dir = release.remote_dir().to_shell();
    format!(
        "mkdir {dir} && cd {dir} && tar zxf ../{}",
        shell_quote(&release.id().archive_name())
    )
}

pub fn link(target: &RemotePath, link: &RemotePath) -> String {
    format!("ln -s {} {}", target.to_shell(), link.to_shell())
}

/// Signal the process whose PID is stored in `pid_file`
pub fn signal(pid_file: &RemotePath, signal: &str) -> String {
    let signal = if !signal.is_empty() && signal.chars().all(|c| c.is_ascii_alphanumeric()) {
        signal.to_string()
    } else {
        shell_quote(signal)
    };
    format!("kill -{} \"$(cat {})\"", signal, pid_file.to_shell())
}
