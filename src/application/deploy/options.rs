//! Deploy Options

use std::path::PathBuf;

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Directory the local archive is written to (and removed from)
    pub work_dir: PathBuf,
    /// Skip the local archive and only announce remote commands
    pub dry_run: bool,
}

impl DeployOptions {
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
            dry_run: false,
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self::new(".")
    }
}
