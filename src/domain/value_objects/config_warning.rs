//! Configuration warning value object.

use std::fmt;
use std::path::PathBuf;

/// Unknown key found while reading a config file. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Dotted path of the unknown key (`remote.pidfile`)
    pub key: String,
    pub file: PathBuf,
    /// 1-indexed line of the key, if it could be located
    pub line: Option<usize>,
    /// Closest known key, if any is within two edits
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}
