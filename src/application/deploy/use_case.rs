//! Deploy Use Case
//!
//! Orchestrates the deployment flow against the configured target:
//! 1. Derive the release identifier from the local clock
//! 2. Archive the committed source tree locally
//! 3. Ensure the remote releases directory exists
//! 4. Upload the archive
//! 5. Remove the local archive
//! 6. Create the release directory and unpack into it
//! 7. Remove the old `current` symlink
//! 8. Point `current` at the new release
//! 9. Signal the service so its supervisor restarts it
//!
//! Steps run strictly in order. The first failure aborts the run; nothing
//! already done on the remote host is undone.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::domain::ports::{
    CommandOutput, DeployEvent, DeployEventSink, DeployStage, NoopEventSink, RemoteExecutor,
    SourceArchiver,
};
use crate::domain::value_objects::{Release, ReleaseId, RemoteLayout};
use crate::error::{RelinkError, RelinkResult};

use super::commands;
use super::options::DeployOptions;

/// Deploy use case - the deployment orchestrator
///
/// Parameterized by its ports so it can run against a fake remote host.
pub struct DeployUseCase<'a, E, A>
where
    E: RemoteExecutor,
    A: SourceArchiver,
{
    config: &'a Config,
    layout: RemoteLayout,
    executor: E,
    archiver: A,
    events: Arc<dyn DeployEventSink>,
}

impl<'a, E, A> DeployUseCase<'a, E, A>
where
    E: RemoteExecutor,
    A: SourceArchiver,
{
    pub fn new(config: &'a Config, executor: E, archiver: A) -> Self {
        Self {
            layout: config.layout(),
            config,
            executor,
            archiver,
            events: Arc::new(NoopEventSink),
        }
    }

    /// Report progress to `events`
    pub fn with_events(mut self, events: Arc<dyn DeployEventSink>) -> Self {
        self.events = events;
        self
    }

    /// Deploy a new release stamped with the current local time
    pub fn deploy(&self, options: &DeployOptions) -> RelinkResult<Release> {
        self.deploy_at(chrono::Local::now().naive_local(), options)
    }

    /// Deploy a new release stamped with `at`
    pub fn deploy_at(&self, at: NaiveDateTime, options: &DeployOptions) -> RelinkResult<Release> {
        let target = self.config.resolve_target()?;
        let release = Release::new(ReleaseId::from_datetime(at), &options.work_dir, &self.layout);

        info!(release = %release.id(), target = %target, "starting deploy");
        self.events.on_event(DeployEvent::Started {
            release: release.id().to_string(),
            target: target.to_string(),
            revision: self.config.source.revision.clone(),
        });

        let mut stage = DeployStage::Init;
        match self.run_pipeline(&release, options, &mut stage) {
            Ok(()) => {
                self.reach(&mut stage, DeployStage::Done);
                info!(release = %release.id(), "deploy complete");
                self.events.on_event(DeployEvent::Completed {
                    release: release.id().to_string(),
                });
                Ok(release)
            }
            Err(err) => {
                info!(release = %release.id(), stage = %stage, error = %err, "deploy aborted");
                self.events.on_event(DeployEvent::Failed {
                    stage,
                    error: err.to_string(),
                });
                Err(err)
            }
        }
    }

    fn run_pipeline(
        &self,
        release: &Release,
        options: &DeployOptions,
        stage: &mut DeployStage,
    ) -> RelinkResult<()> {
        let archive = if options.dry_run {
            info!(path = %release.archive_path().display(), "dry run: not creating local archive");
            None
        } else {
            Some(self.create_archive(release)?)
        };
        self.reach(stage, DeployStage::Archived);

        self.ensure_releases_dir()?;
        self.transfer(release.archive_path(), release)?;
        if let Some(archive) = archive {
            archive.remove()?;
        }
        self.reach(stage, DeployStage::Uploaded);

        self.run_checked(&commands::extract(release))?;
        self.reach(stage, DeployStage::Extracted);

        self.activate(release)?;
        self.reach(stage, DeployStage::Linked);

        self.restart()?;
        self.reach(stage, DeployStage::Restarted);

        Ok(())
    }

    fn create_archive(&self, release: &Release) -> RelinkResult<LocalArchive> {
        let revision = &self.config.source.revision;
        info!(revision = %revision, path = %release.archive_path().display(), "archiving source");
        self.archiver.archive(revision, release.archive_path())?;
        Ok(LocalArchive::new(release.archive_path()))
    }

    fn transfer(&self, local: &Path, release: &Release) -> RelinkResult<()> {
        let remote = release.remote_archive();
        info!(local = %local.display(), remote = %remote, "put");
        if self.events.wants_detailed_events() {
            self.events.on_event(DeployEvent::Transfer {
                local: local.to_path_buf(),
                remote: remote.to_string(),
            });
        }
        self.executor.transfer(local, remote)?;
        Ok(())
    }

    /// Create the releases directory unless it already exists
    pub fn ensure_releases_dir(&self) -> RelinkResult<()> {
        let dir = &self.layout.releases_dir;
        if self.probe(&commands::dir_exists(dir))? {
            debug!(dir = %dir, "releases directory exists");
            return Ok(());
        }
        self.run_checked(&commands::make_dir(dir))?;
        Ok(())
    }

    /// Remove the `current` symlink if there is one
    pub fn remove_current_link(&self) -> RelinkResult<()> {
        let link = &self.layout.current_link;
        if !self.probe(&commands::link_exists(link))? {
            debug!(link = %link, "no current link to remove");
            return Ok(());
        }
        self.run_checked(&commands::remove_link(link))?;
        Ok(())
    }

    /// Repoint `current` at `release`
    pub fn activate(&self, release: &Release) -> RelinkResult<()> {
        self.remove_current_link()?;
        self.run_checked(&commands::link(
            release.remote_dir(),
            &self.layout.current_link,
        ))?;
        Ok(())
    }

    /// Signal the process recorded in the PID file. Whatever supervises it
    /// is expected to start it again.
    pub fn restart(&self) -> RelinkResult<()> {
        self.run_checked(&commands::signal(
            &self.layout.pid_file,
            self.config.signal(),
        ))?;
        Ok(())
    }

    /// Restart as a standalone operation, reported like a pipeline stage
    pub fn restart_only(&self) -> RelinkResult<()> {
        let target = self.config.resolve_target().ok().map(|t| t.to_string());
        info!(target = ?target, "restarting service");
        self.events.on_event(DeployEvent::RestartStarted { target });

        match self.restart() {
            Ok(()) => {
                self.events.on_event(DeployEvent::StageCompleted {
                    stage: DeployStage::Restarted,
                });
                self.events.on_event(DeployEvent::RestartCompleted);
                Ok(())
            }
            Err(err) => {
                info!(error = %err, "restart aborted");
                self.events.on_event(DeployEvent::Failed {
                    stage: DeployStage::Init,
                    error: err.to_string(),
                });
                Err(err)
            }
        }
    }

    fn reach(&self, stage: &mut DeployStage, next: DeployStage) {
        debug!(from = %stage, to = %next, "stage");
        *stage = next;
        if next != DeployStage::Done {
            self.events.on_event(DeployEvent::StageCompleted { stage: next });
        }
    }

    /// Run a command whose exit status is the answer (true = exit 0)
    fn probe(&self, command: &str) -> RelinkResult<bool> {
        let output = self.executor.run(command)?;
        debug!(command, status = %output.status_label(), "probe");
        Ok(output.is_success())
    }

    /// Run a command that must succeed
    fn run_checked(&self, command: &str) -> RelinkResult<CommandOutput> {
        info!(command, "run");
        if self.events.wants_detailed_events() {
            self.events.on_event(DeployEvent::RemoteCommand {
                command: command.to_string(),
            });
        }
        let output = self.executor.run(command)?;
        if !output.is_success() {
            return Err(RelinkError::RemoteCommand {
                command: command.to_string(),
                status: output.status_label(),
                stderr: output.stderr,
            });
        }
        Ok(output)
    }
}

/// Local archive that is removed on drop unless removed explicitly first,
/// so an aborted run does not leave archives in the working directory.
struct LocalArchive {
    path: PathBuf,
    armed: bool,
}

impl LocalArchive {
    fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            armed: true,
        }
    }

    fn remove(mut self) -> RelinkResult<()> {
        self.armed = false;
        debug!(path = %self.path.display(), "removing local archive");
        fs::remove_file(&self.path).map_err(|source| RelinkError::LocalCleanup {
            path: self.path.clone(),
            source,
        })
    }
}

impl Drop for LocalArchive {
    fn drop(&mut self) {
        if self.armed {
            if let Err(e) = fs::remove_file(&self.path) {
                warn!(path = %self.path.display(), error = %e, "could not remove local archive");
            }
        }
    }
}
