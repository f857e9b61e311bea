//! Core data types for the Solvent resolution bridge.
//!
//! This crate defines what a resolution session works on: versions and
//! version ranges, package dependencies, catalog packages and the catalog
//! provider, target platform filtering, explicit requests, change plans, and
//! configuration.
//!
//! Nothing here knows about the solver's integer encoding.

pub mod catalog;
pub mod config;
pub mod dependency;
pub mod package;
pub mod plan;
pub mod platform;
pub mod request;
pub mod version;
