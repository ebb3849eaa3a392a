//! Source archivers

mod git;

pub use git::GitArchiver;
