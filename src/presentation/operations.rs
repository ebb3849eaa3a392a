//! Operation registry
//!
//! The named operations the binary can run, and the listing shown when it
//! is invoked without any.

use std::fmt::Write as _;

use crate::config::suggest::closest_match;
use crate::error::{RelinkError, RelinkResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Deploy,
    Restart,
}

impl Operation {
    pub const ALL: [Operation; 2] = [Operation::Deploy, Operation::Restart];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Deploy => "deploy",
            Operation::Restart => "restart",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Operation::Deploy => "Upload the committed tree as a new release and switch to it",
            Operation::Restart => "Signal the running service so its supervisor restarts it",
        }
    }

    pub fn parse(name: &str) -> RelinkResult<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == name)
            .ok_or_else(|| RelinkError::UnknownOperation {
                name: name.to_string(),
                suggestion: closest_match(name, Self::ALL.iter().map(|op| op.name()))
                    .map(str::to_string),
            })
    }

    /// Resolve every name up front so a typo fails before anything runs
    pub fn parse_all<S: AsRef<str>>(names: &[S]) -> RelinkResult<Vec<Self>> {
        names.iter().map(|n| Self::parse(n.as_ref())).collect()
    }
}

/// Text printed when no operation is given
pub fn render_list() -> String {
    let width = Operation::ALL
        .iter()
        .map(|op| op.name().len())
        .max()
        .unwrap_or(0);

    let mut out = String::from("Available operations:\n");
    for op in Operation::ALL {
        let _ = writeln!(out, "  {:<width$}  {}", op.name(), op.summary(), width = width);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_operations() {
        assert_eq!(Operation::parse("deploy").unwrap(), Operation::Deploy);
        assert_eq!(Operation::parse("restart").unwrap(), Operation::Restart);
    }

    #[test]
    fn parse_suggests_close_name() {
        let err = Operation::parse("deplyo").unwrap_err();
        assert!(matches!(
            err,
            RelinkError::UnknownOperation { ref suggestion, .. } if suggestion.as_deref() == Some("deploy")
        ));
    }

    #[test]
    fn parse_without_suggestion() {
        let err = Operation::parse("rollback").unwrap_err();
        assert!(matches!(
            err,
            RelinkError::UnknownOperation { suggestion: None, .. }
        ));
    }

    #[test]
    fn parse_all_fails_on_any_unknown() {
        assert!(Operation::parse_all(&["deploy", "nope"]).is_err());
        assert_eq!(
            Operation::parse_all(&["restart", "deploy"]).unwrap(),
            vec![Operation::Restart, Operation::Deploy]
        );
    }

    #[test]
    fn listing_has_one_row_per_operation() {
        let list = render_list();
        assert!(list.starts_with("Available operations:\n"));
        assert_eq!(list.lines().count(), 1 + Operation::ALL.len());
        assert!(list.contains("  deploy   Upload"));
        assert!(list.contains("  restart  Signal"));
    }
}
