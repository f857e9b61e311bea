//! Operation: reconcile a stored solver answer into an ordered change plan.

use std::path::Path;

use solvent_core::plan::ChangePlan;
use solvent_core::platform::DeclaredPlatforms;
use solvent_resolver::order::{DependencyOrderer, PlanOrderer};
use solvent_resolver::reconcile::reconcile as reconcile_outcome;
use solvent_resolver::solution::SolverOutcome;
use solvent_resolver::universe::Universe;
use solvent_util::errors::SolventError;

use crate::context::ResolveContext;

/// Rebuild the universe the answer was computed against and reconcile
/// `solution` (a TOML answer document) into a plan.
pub fn reconcile(ctx: &ResolveContext, solution: &Path) -> miette::Result<ChangePlan> {
    let content = std::fs::read_to_string(solution).map_err(|e| SolventError::Solver {
        message: format!("Failed to read solver answer {}: {e}", solution.display()),
    })?;
    let outcome = SolverOutcome::from_toml(&content)?;

    let universe = Universe::build(
        &ctx.catalog,
        ctx.config.target_platform.as_deref(),
        &DeclaredPlatforms,
    );
    let mut plan = reconcile_outcome(&universe, &outcome)?;
    DependencyOrderer.order(&universe, &mut plan)?;
    Ok(plan)
}
