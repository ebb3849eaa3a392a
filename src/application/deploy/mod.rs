//! Deploy Module
//!
//! ## Structure
//!
//! - `options` - `DeployOptions`
//! - `commands` - Remote shell commands the pipeline issues
//! - `use_case` - `DeployUseCase`, the ordered deploy pipeline
//!
//! ## Usage
//!
//! ```ignore
//! use relink::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(&config, executor, archiver);
//! let release = use_case.deploy(&DeployOptions::new("."))?;
//! ```

pub mod commands;
mod options;
mod use_case;

pub use options::DeployOptions;
pub use use_case::DeployUseCase;
