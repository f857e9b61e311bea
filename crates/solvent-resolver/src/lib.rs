//! Dependency resolution bridge: maps a package catalog into an integer
//! version universe, emits the solver problem, and reconciles the solver's
//! answer into an ordered change plan.

pub mod compile;
pub mod emit;
pub mod order;
pub mod reconcile;
pub mod session;
pub mod solution;
pub mod solver;
pub mod universe;
