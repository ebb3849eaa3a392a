//! Remote executors
//!
//! - `SshExecutor` - the real thing, via `ssh`/`scp`
//! - `DryRunExecutor` - prints the plan, never connects

mod dry_run;
mod ssh;

pub use dry_run::DryRunExecutor;
pub use ssh::SshExecutor;
