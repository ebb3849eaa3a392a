//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Operations are positional and run in the order given
//! - No operation at all lists what is available

use std::path::PathBuf;

use clap::Parser;
use is_terminal::IsTerminal;

use crate::config::ConfigOverrides;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorWhen {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorWhen {
    /// Decide whether stdout output gets ANSI colour
    pub fn enabled(self) -> bool {
        self.resolve(
            |key| std::env::var(key).ok(),
            std::io::stdout().is_terminal(),
        )
    }

    /// Decide whether log lines on stderr get ANSI colour
    pub fn enabled_on_stderr(self) -> bool {
        self.resolve(
            |key| std::env::var(key).ok(),
            std::io::stderr().is_terminal(),
        )
    }

    fn resolve(self, get_env: impl Fn(&str) -> Option<String>, is_tty: bool) -> bool {
        match self {
            ColorWhen::Always => true,
            ColorWhen::Never => false,
            ColorWhen::Auto => {
                let dumb = get_env("TERM")
                    .map(|t| t.eq_ignore_ascii_case("dumb"))
                    .unwrap_or(false);
                is_tty && !dumb && get_env("NO_COLOR").is_none()
            }
        }
    }
}

/// Relink - push a git revision to a host and switch it live
#[derive(Parser, Debug)]
#[command(name = "relink")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'relink' without arguments to list the available operations.")]
pub struct Cli {
    /// Operations to run, in order
    #[arg(value_name = "OPERATION")]
    pub operations: Vec<String>,

    /// List available operations and exit
    #[arg(short, long)]
    pub list: bool,

    /// Configuration file (default: ./relink.toml, then the user config dir)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Target host, optionally with port (host:2222)
    #[arg(short = 'H', long, value_name = "HOST[:PORT]")]
    pub host: Option<String>,

    /// Remote login user
    #[arg(short, long)]
    pub user: Option<String>,

    /// Git revision to deploy
    #[arg(long, value_name = "REV")]
    pub revision: Option<String>,

    /// Print what would be done without connecting anywhere
    #[arg(long)]
    pub dry_run: bool,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto)]
    pub color: ColorWhen,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Whether this invocation only lists operations
    pub fn wants_listing(&self) -> bool {
        self.list || self.operations.is_empty()
    }

    /// Config values given on the command line
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            user: self.user.clone(),
            revision: self.revision.clone(),
        }
    }

    /// Default tracing filter for the `-v` count
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
