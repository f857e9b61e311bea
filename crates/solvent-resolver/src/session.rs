//! One resolution session: rebuild the universe, emit the problem, solve,
//! reconcile and order.

use solvent_core::catalog::CatalogProvider;
use solvent_core::plan::ChangePlan;
use solvent_core::platform::PlatformFilter;
use solvent_core::request::Request;
use solvent_util::errors::SolventError;

use crate::emit::emit_problem;
use crate::order::PlanOrderer;
use crate::reconcile::reconcile;
use crate::solver::Solver;
use crate::universe::Universe;

/// Owns the universe of a resolution session.
///
/// Every entry point takes `&mut self` and rebuilds the universe before using
/// it, so one session's mapping can never be observed half-built by another.
#[derive(Debug, Default)]
pub struct Resolver {
    universe: Universe,
    target_platform: Option<String>,
}

impl Resolver {
    pub fn new(target_platform: Option<String>) -> Self {
        Self {
            universe: Universe::new(),
            target_platform,
        }
    }

    pub fn target_platform(&self) -> Option<&str> {
        self.target_platform.as_deref()
    }

    /// The universe built by the last session.
    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Rebuild the universe and render the problem text for `request`.
    pub fn problem(
        &mut self,
        catalog: &dyn CatalogProvider,
        filter: &dyn PlatformFilter,
        request: Option<&Request>,
    ) -> Result<String, SolventError> {
        self.universe
            .rebuild(catalog, self.target_platform.as_deref(), filter);
        emit_problem(&self.universe, request)
    }

    /// Run a full resolution and return the ordered change plan.
    pub fn resolve(
        &mut self,
        catalog: &dyn CatalogProvider,
        filter: &dyn PlatformFilter,
        request: &Request,
        solver: &dyn Solver,
        orderer: &dyn PlanOrderer,
    ) -> Result<ChangePlan, SolventError> {
        let problem = self.problem(catalog, filter, Some(request))?;
        tracing::trace!("Solver problem:\n{problem}");
        let outcome = solver.solve(&problem)?;
        let mut plan = reconcile(&self.universe, &outcome)?;
        orderer.order(&self.universe, &mut plan)?;
        Ok(plan)
    }
}
