//! Relink CLI - push a git revision to a host and switch it live
//!
//! Usage: relink [OPTIONS] [OPERATION]...
//!
//! Operations:
//!   deploy   Upload the committed tree as a new release and switch to it
//!   restart  Signal the running service so its supervisor restarts it

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use relink::config::{self, Config};
use relink::presentation::factory::{self, RunSettings};
use relink::presentation::{render_list, Cli, Operation};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_level(), cli.color.enabled_on_stderr());

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(default_level: &str, ansi: bool) {
    let filter = EnvFilter::try_from_env("RELINK_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    if cli.wants_listing() {
        print!("{}", render_list());
        return Ok(());
    }

    let operations = Operation::parse_all(&cli.operations)?;
    let project_dir = std::env::current_dir().context("cannot determine working directory")?;
    let config = load_config(&cli, &project_dir)?;

    let settings = RunSettings {
        project_dir,
        dry_run: cli.dry_run,
        json: cli.json,
        color: !cli.json && cli.color.enabled(),
    };

    for operation in operations {
        run_operation(operation, &config, &settings)?;
    }
    Ok(())
}

fn load_config(cli: &Cli, project_dir: &Path) -> Result<Config> {
    let (config, warnings, source) = config::load_from(cli.config.as_deref(), project_dir)?;
    if let Some(path) = &source {
        debug!(path = %path.display(), "configuration loaded");
    }
    for warning in &warnings {
        warn!("{}", warning);
    }

    let config = config::with_env_overrides(config, |key| std::env::var(key).ok());
    Ok(cli.overrides().apply(config))
}

fn run_operation(operation: Operation, config: &Config, settings: &RunSettings) -> Result<()> {
    debug!(operation = operation.name(), "running operation");
    let use_case = factory::create_deploy_use_case(config, settings, operation.name())?;

    match operation {
        Operation::Deploy => {
            use_case.deploy(&settings.deploy_options())?;
        }
        Operation::Restart => use_case.restart_only()?,
    }
    Ok(())
}
