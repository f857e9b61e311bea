//! Serialize a universe and an optional request into the solver's stanza-based
//! problem format.

use std::fmt::Write;

use solvent_core::request::Request;
use solvent_util::errors::SolventError;

use crate::compile::{compile, MissingPolicy};
use crate::universe::{Universe, UniversePackage};

/// Render one stanza per universe package, each followed by a blank line.
///
/// Unknown dependency targets are dropped with a warning; unknown conflict and
/// provides targets are dropped silently. Every stanza forbids the other
/// versions of its own package.
pub fn emit_universe(universe: &Universe) -> Result<String, SolventError> {
    let mut out = String::new();
    for pkg in universe.iter() {
        write_stanza(&mut out, universe, pkg)?;
    }
    Ok(out)
}

/// Render the universe followed by a request stanza when `request` is given.
///
/// A request goal that cannot be mapped is an error.
pub fn emit_problem(universe: &Universe, request: Option<&Request>) -> Result<String, SolventError> {
    let mut out = emit_universe(universe)?;
    if let Some(request) = request {
        let install = compile(universe, &request.install, MissingPolicy::Fail)?;
        let remove = compile(universe, &request.remove, MissingPolicy::Fail)?;
        let upgrade = compile(universe, &request.upgrade, MissingPolicy::Fail)?;
        out.push_str("request:\n");
        writeln!(out, "install: {install}").ok();
        writeln!(out, "remove: {remove}").ok();
        writeln!(out, "upgrade: {upgrade}").ok();
    }
    Ok(out)
}

fn write_stanza(
    out: &mut String,
    universe: &Universe,
    pkg: &UniversePackage,
) -> Result<(), SolventError> {
    let depends = compile(universe, &pkg.package.dependencies, MissingPolicy::Warn)?;
    let mut conflicts = compile(universe, &pkg.package.conflicts, MissingPolicy::Ignore)?;
    if !conflicts.trim().is_empty() {
        conflicts.push_str(", ");
    }
    write!(conflicts, "{} != {}", pkg.universe_name, pkg.ordinal).ok();
    let provides = compile(universe, &pkg.package.provides, MissingPolicy::Ignore)?;

    // Writing into a String cannot fail.
    writeln!(out, "package: {}", pkg.universe_name).ok();
    writeln!(out, "version: {}", pkg.ordinal).ok();
    writeln!(out, "installed: {}", pkg.installed()).ok();
    writeln!(out, "depends: {depends}").ok();
    writeln!(out, "conflicts: {conflicts}").ok();
    writeln!(out, "provides: {provides}").ok();
    out.push('\n');
    Ok(())
}
