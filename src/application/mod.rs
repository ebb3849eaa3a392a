//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (value objects, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Archive, upload, unpack, relink, restart

pub mod deploy;

pub use deploy::{DeployOptions, DeployUseCase};
