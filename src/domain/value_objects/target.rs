//! Target value object - the single remote host a run deploys to

use crate::error::{RelinkError, RelinkResult};

/// Default ssh port when the host string carries none
pub const DEFAULT_SSH_PORT: u16 = 22;

/// Remote deploy target: host, port and login user.
///
/// Built once from configuration and never mutated during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    host: String,
    port: u16,
    user: Option<String>,
}

impl Target {
    pub fn new(host: impl Into<String>, port: u16, user: Option<String>) -> Self {
        Self {
            host: host.into(),
            port,
            user,
        }
    }

    /// Parse a `host[:port]` string, as written in configuration.
    ///
    /// Bracketed IPv6 literals (`[::1]:2222`) are accepted. A bare IPv6
    /// literal is taken as host only.
    pub fn parse(spec: &str, user: Option<String>) -> RelinkResult<Self> {
        let spec = spec.trim();
        let invalid = |reason: &str| RelinkError::InvalidHost {
            value: spec.to_string(),
            reason: reason.to_string(),
        };

        if spec.is_empty() {
            return Err(invalid("host is empty"));
        }

        let (host, port) = if let Some(rest) = spec.strip_prefix('[') {
            let (host, tail) = rest
                .split_once(']')
                .ok_or_else(|| invalid("missing closing ']'"))?;
            match tail {
                "" => (host, None),
                _ => {
                    let port = tail
                        .strip_prefix(':')
                        .ok_or_else(|| invalid("expected ':' after ']'"))?;
                    (host, Some(port))
                }
            }
        } else if spec.matches(':').count() == 1 {
            let (host, port) = spec.split_once(':').unwrap_or((spec, ""));
            (host, Some(port))
        } else {
            (spec, None)
        };

        if host.is_empty() {
            return Err(invalid("host is empty"));
        }
        // ssh and scp would read a leading dash as an option
        if host.starts_with('-') {
            return Err(invalid("host must not start with '-'"));
        }

        let port = match port {
            Some(p) => p
                .parse::<u16>()
                .ok()
                .filter(|p| *p != 0)
                .ok_or_else(|| invalid("port must be a number between 1 and 65535"))?,
            None => DEFAULT_SSH_PORT,
        };

        let user = user.filter(|u| !u.trim().is_empty());
        if user.as_deref().is_some_and(|u| u.starts_with('-')) {
            return Err(invalid("user must not start with '-'"));
        }

        Ok(Self::new(host, port, user))
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// ssh/scp destination (`user@host` or `host`)
    pub fn destination(&self) -> String {
        match &self.user {
            Some(user) => format!("{}@{}", user, self.host),
            None => self.host.clone(),
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(user) = &self.user {
            write!(f, "{}@", user)?;
        }
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}
