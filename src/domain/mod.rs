//! Domain Layer
//!
//! Release and target value types plus the ports the deploy pipeline talks
//! through.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (Target, Release, RemotePath)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod ports;
pub mod value_objects;
