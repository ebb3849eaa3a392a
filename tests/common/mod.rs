//! Common test utilities for Relink CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with temp project and home directories
//! - `TestResult`: Captured exit code and output of one run

#![allow(dead_code)]

pub mod env;

pub use env::*;
