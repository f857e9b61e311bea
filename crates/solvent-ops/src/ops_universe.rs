//! Operation: show how catalog versions map to solver ordinals.

use std::fmt::Write;

use solvent_core::platform::DeclaredPlatforms;
use solvent_resolver::universe::Universe;

use crate::context::ResolveContext;

/// Build the universe for the context's catalog and target platform.
pub fn universe(ctx: &ResolveContext) -> miette::Result<Universe> {
    let universe = Universe::build(
        &ctx.catalog,
        ctx.config.target_platform.as_deref(),
        &DeclaredPlatforms,
    );
    if universe.is_empty() {
        tracing::warn!("No catalog package is compatible with the target platform");
    }
    Ok(universe)
}

/// One line per package: `name version -> ordinal`, with installed packages
/// marked by a trailing `*`.
pub fn render(universe: &Universe) -> String {
    let mut out = String::new();
    for pkg in universe.iter() {
        write!(out, "{} {} -> {}", pkg.universe_name, pkg.version(), pkg.ordinal).ok();
        if pkg.installed() {
            out.push_str(" *");
        }
        out.push('\n');
    }
    out
}
