//! Shared utilities for the Solvent resolution bridge.
//!
//! This crate provides cross-cutting concerns used by all other Solvent crates:
//! error types, filesystem helpers, and process spawning for external solvers.

pub mod errors;
pub mod fs;
pub mod process;
