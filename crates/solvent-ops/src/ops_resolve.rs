//! Operation: full resolution through the configured external solver.

use solvent_core::plan::ChangePlan;
use solvent_core::platform::DeclaredPlatforms;
use solvent_core::request::Request;
use solvent_resolver::order::DependencyOrderer;
use solvent_resolver::solver::CommandSolver;

use crate::context::ResolveContext;

/// Resolve `request` against the catalog and return the ordered plan.
pub fn resolve(ctx: &ResolveContext, request: &Request) -> miette::Result<ChangePlan> {
    let solver = CommandSolver::from_config(&ctx.config.solver, &ctx.root)?;
    if request.is_empty() {
        tracing::debug!("Empty request, solving for the installed set only");
    }
    let mut resolver = ctx.resolver();
    let plan = resolver.resolve(
        &ctx.catalog,
        &DeclaredPlatforms,
        request,
        &solver,
        &DependencyOrderer,
    )?;
    tracing::debug!(
        "Plan: {} additions, {} removals",
        plan.additions().len(),
        plan.removals().len()
    );
    Ok(plan)
}
