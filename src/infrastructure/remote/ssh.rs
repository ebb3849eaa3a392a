//! SSH Remote Executor
//!
//! Runs remote commands through the system `ssh` client and copies files
//! with `scp`. Authentication is left entirely to the ssh configuration
//! (agent, keys, `~/.ssh/config`).

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, trace};

use crate::domain::ports::{CommandOutput, ExecError, RemoteExecutor};
use crate::domain::value_objects::{RemotePath, Target};

/// Exit status ssh uses for its own (connection/auth) failures
const SSH_CONNECTION_FAILURE: i32 = 255;

/// Program plus fixed leading arguments
#[derive(Debug, Clone)]
struct Program {
    program: String,
    args: Vec<String>,
}

impl Program {
    fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

/// Remote executor backed by `ssh` and `scp`
pub struct SshExecutor {
    target: Target,
    ssh: Program,
    scp: Program,
}

impl SshExecutor {
    pub fn new(target: Target) -> Self {
        Self {
            target,
            ssh: Program::new("ssh"),
            scp: Program::new("scp"),
        }
    }

    /// Arguments for `ssh` to run `command` on the target
    fn ssh_args(&self, command: &str) -> Vec<String> {
        vec![
            "-p".to_string(),
            self.target.port().to_string(),
            self.target.destination(),
            command.to_string(),
        ]
    }

    /// `scp` destination (`user@host:path`, IPv6 hosts bracketed)
    fn scp_destination(&self, remote: &RemotePath) -> String {
        let host = if self.target.host().contains(':') {
            format!("[{}]", self.target.host())
        } else {
            self.target.host().to_string()
        };
        match self.target.user() {
            Some(user) => format!("{}@{}:{}", user, host, remote.to_scp()),
            None => format!("{}:{}", host, remote.to_scp()),
        }
    }

    /// The local path is passed through as-is; it need not be UTF-8
    fn scp_args(&self, local: &Path, remote: &RemotePath) -> Vec<OsString> {
        vec![
            OsString::from("-P"),
            OsString::from(self.target.port().to_string()),
            local.as_os_str().to_os_string(),
            OsString::from(self.scp_destination(remote)),
        ]
    }

    #[cfg(test)]
    fn with_programs(mut self, ssh: Program, scp: Program) -> Self {
        self.ssh = ssh;
        self.scp = scp;
        self
    }
}

impl RemoteExecutor for SshExecutor {
    fn run(&self, command: &str) -> Result<CommandOutput, ExecError> {
        trace!(program = %self.ssh.program, args = ?self.ssh_args(command), "spawn");
        let output = self
            .ssh
            .command()
            .args(self.ssh_args(command))
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ExecError::Spawn {
                program: self.ssh.program.clone(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let code = output.status.code();

        if code == Some(SSH_CONNECTION_FAILURE) {
            return Err(ExecError::Connection {
                destination: self.target.to_string(),
                message: stderr.trim().to_string(),
            });
        }

        debug!(command, code = ?code, "remote command finished");
        Ok(CommandOutput {
            code,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr,
        })
    }

    fn transfer(&self, local: &Path, remote: &RemotePath) -> Result<(), ExecError> {
        let args = self.scp_args(local, remote);
        trace!(program = %self.scp.program, args = ?args, "spawn");
        let output = self
            .scp
            .command()
            .args(&args)
            // Allow password input
            .stdin(Stdio::inherit())
            .output()
            .map_err(|source| ExecError::Spawn {
                program: self.scp.program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                format!("scp failed with exit code: {:?}", output.status.code())
            } else {
                stderr
            };
            return Err(ExecError::Transfer {
                local: local.to_path_buf(),
                remote: self.scp_destination(remote),
                message,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> Target {
        Target::new("example.org", 2222, Some("deploy".to_string()))
    }

    /// `sh -c <script>` standing in for ssh/scp
    fn sh(script: &str, name: &str) -> Program {
        Program {
            program: "sh".to_string(),
            args: vec!["-c".to_string(), script.to_string(), name.to_string()],
        }
    }

    #[test]
    fn ssh_args_carry_port_and_destination() {
        let exec = SshExecutor::new(target());
        assert_eq!(
            exec.ssh_args("test -d ~/'releases'"),
            vec!["-p", "2222", "deploy@example.org", "test -d ~/'releases'"]
        );
    }

    #[test]
    fn scp_args_use_home_relative_destination() {
        let exec = SshExecutor::new(target());
        let args = exec.scp_args(
            Path::new("20240102030405.tar.gz"),
            &RemotePath::new("~/releases/20240102030405.tar.gz"),
        );
        assert_eq!(
            args.iter().map(|a| a.to_str().unwrap()).collect::<Vec<_>>(),
            vec![
                "-P",
                "2222",
                "20240102030405.tar.gz",
                "deploy@example.org:releases/20240102030405.tar.gz"
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn scp_args_keep_non_utf8_local_path() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let exec = SshExecutor::new(target());
        let local = Path::new(OsStr::from_bytes(b"/work/caf\xe9/20240102030405.tar.gz"));

        let args = exec.scp_args(local, &RemotePath::new("~/releases/20240102030405.tar.gz"));

        assert_eq!(args[2].as_os_str(), local.as_os_str());
    }

    #[test]
    fn scp_destination_brackets_ipv6() {
        let exec = SshExecutor::new(Target::new("::1", 22, None));
        assert_eq!(
            exec.scp_destination(&RemotePath::new("/srv/releases")),
            "[::1]:/srv/releases"
        );
    }

    #[cfg(unix)]
    #[test]
    fn run_passes_command_as_last_argument() {
        let exec = SshExecutor::new(target())
            .with_programs(sh("printf '%s\\n' \"$@\"", "ssh"), Program::new("scp"));

        let output = exec.run("test -d ~/'releases'").unwrap();

        assert!(output.is_success());
        assert_eq!(
            output.stdout,
            "-p\n2222\ndeploy@example.org\ntest -d ~/'releases'\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn run_reports_nonzero_exit_as_outcome() {
        let exec = SshExecutor::new(target())
            .with_programs(sh("echo oops >&2; exit 3", "ssh"), Program::new("scp"));

        let output = exec.run("false").unwrap();

        assert_eq!(output.code, Some(3));
        assert_eq!(output.stderr.trim(), "oops");
    }

    #[cfg(unix)]
    #[test]
    fn run_maps_255_to_connection_error() {
        let exec = SshExecutor::new(target()).with_programs(
            sh("echo 'Connection refused' >&2; exit 255", "ssh"),
            Program::new("scp"),
        );

        let err = exec.run("true").unwrap_err();

        match err {
            ExecError::Connection {
                destination,
                message,
            } => {
                assert_eq!(destination, "deploy@example.org:2222");
                assert_eq!(message, "Connection refused");
            }
            other => panic!("expected Connection, got {other:?}"),
        }
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let exec = SshExecutor::new(target()).with_programs(
            Program::new("relink-test-no-such-ssh"),
            Program::new("relink-test-no-such-scp"),
        );

        assert!(matches!(
            exec.run("true").unwrap_err(),
            ExecError::Spawn { .. }
        ));
        assert!(matches!(
            exec.transfer(Path::new("a"), &RemotePath::new("~/b"))
                .unwrap_err(),
            ExecError::Spawn { .. }
        ));
    }

    #[cfg(unix)]
    #[test]
    fn transfer_failure_carries_stderr() {
        let exec = SshExecutor::new(target()).with_programs(
            Program::new("ssh"),
            sh("echo 'lost connection' >&2; exit 1", "scp"),
        );

        let err = exec
            .transfer(Path::new("x.tar.gz"), &RemotePath::new("~/releases/x.tar.gz"))
            .unwrap_err();

        match err {
            ExecError::Transfer {
                remote, message, ..
            } => {
                assert_eq!(remote, "deploy@example.org:releases/x.tar.gz");
                assert_eq!(message, "lost connection");
            }
            other => panic!("expected Transfer, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn transfer_success() {
        let exec = SshExecutor::new(target())
            .with_programs(Program::new("ssh"), sh("test \"$1\" = -P", "scp"));

        exec.transfer(Path::new("x.tar.gz"), &RemotePath::new("~/releases/x.tar.gz"))
            .unwrap();
    }
}
