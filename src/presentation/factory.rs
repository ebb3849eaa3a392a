//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::{DeployOptions, DeployUseCase};
use crate::config::Config;
use crate::domain::ports::{DeployEventSink, RemoteExecutor};
use crate::error::RelinkResult;
use crate::infrastructure::{ConsoleEventSink, DryRunExecutor, GitArchiver, JsonEventSink, SshExecutor};

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase<'a> = DeployUseCase<'a, Box<dyn RemoteExecutor>, GitArchiver>;

/// How the binary was asked to run, independent of configuration
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Git working copy to archive; the local archive is written here too
    pub project_dir: PathBuf,
    pub dry_run: bool,
    pub json: bool,
    pub color: bool,
}

impl RunSettings {
    pub fn deploy_options(&self) -> DeployOptions {
        DeployOptions::new(&self.project_dir).dry_run(self.dry_run)
    }
}

/// Pick the remote executor
///
/// The dry-run executor writes to stderr in JSON mode so stdout stays NDJSON.
pub fn create_executor(config: &Config, settings: &RunSettings) -> RelinkResult<Box<dyn RemoteExecutor>> {
    if settings.dry_run {
        let executor = if settings.json {
            DryRunExecutor::stderr()
        } else {
            DryRunExecutor::stdout()
        };
        return Ok(Box::new(executor));
    }

    Ok(Box::new(SshExecutor::new(config.resolve_target()?)))
}

/// Pick the event sink for one operation
pub fn create_event_sink(settings: &RunSettings, command: &'static str) -> Arc<dyn DeployEventSink> {
    if settings.json {
        return Arc::new(JsonEventSink::stdout(command));
    }

    let console = ConsoleEventSink::stdout(settings.color);
    if settings.dry_run {
        Arc::new(console.summary_only())
    } else {
        Arc::new(console)
    }
}

/// Create a deploy use case with all dependencies wired up
pub fn create_deploy_use_case<'a>(
    config: &'a Config,
    settings: &RunSettings,
    command: &'static str,
) -> RelinkResult<ConcreteDeployUseCase<'a>> {
    let executor = create_executor(config, settings)?;
    let archiver = GitArchiver::new(&settings.project_dir);

    Ok(DeployUseCase::new(config, executor, archiver)
        .with_events(create_event_sink(settings, command)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RelinkError;

    fn settings(dry_run: bool) -> RunSettings {
        RunSettings {
            project_dir: PathBuf::from("."),
            dry_run,
            json: false,
            color: false,
        }
    }

    #[test]
    fn real_run_needs_a_host() {
        let err = create_deploy_use_case(&Config::default(), &settings(false), "deploy")
            .err()
            .unwrap();
        assert!(matches!(err, RelinkError::MissingHost));
    }

    #[test]
    fn real_run_with_host_builds() {
        let mut config = Config::default();
        config.target.host = Some("example.org:2222".to_string());
        assert!(create_deploy_use_case(&config, &settings(false), "deploy").is_ok());
    }

    #[test]
    fn dry_run_builds_without_host() {
        assert!(create_deploy_use_case(&Config::default(), &settings(true), "restart").is_ok());
    }

    #[test]
    fn dry_run_console_is_summary_only() {
        assert!(!create_event_sink(&settings(true), "deploy").wants_detailed_events());
        assert!(create_event_sink(&settings(false), "deploy").wants_detailed_events());
    }

    #[test]
    fn deploy_options_follow_settings() {
        let options = settings(true).deploy_options();
        assert!(options.dry_run);
        assert_eq!(options.work_dir, PathBuf::from("."));
    }
}
