//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - The registry of named operations
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - clap definition
//! - `operations` - operation names, summaries and the listing
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use relink::presentation::factory;
//!
//! let use_case = factory::create_deploy_use_case(&config, &settings, "deploy")?;
//! let release = use_case.deploy(&settings.deploy_options())?;
//! ```

pub mod cli;
pub mod factory;
pub mod operations;

pub use cli::{Cli, ColorWhen};
pub use factory::{create_deploy_use_case, RunSettings};
pub use operations::{render_list, Operation};
