//! Turn a solver outcome into a change plan.

use solvent_core::plan::ChangePlan;
use solvent_util::errors::SolventError;

use crate::solution::{Criterion, SolverOutcome};
use crate::universe::Universe;

/// Build the change plan for `outcome`.
///
/// Installed packages named in the `Removed` bucket are planned for removal.
/// Selected packages classified as `New` or `VersionChanged` are planned for
/// installation; other selected packages are already satisfied. Selected
/// units unknown to the universe and plan entries the plan rejects are logged
/// and skipped, but a plan that ends up failed is reported as an error.
pub fn reconcile(universe: &Universe, outcome: &SolverOutcome) -> Result<ChangePlan, SolventError> {
    let Some(selection) = outcome.selection.as_ref() else {
        return Err(SolventError::NoSolution);
    };
    let classification = &outcome.classification;

    for criterion in Criterion::ALL {
        let names: Vec<&str> = classification.names(criterion).collect();
        if !names.is_empty() {
            tracing::debug!("{}: {}", criterion.label(), names.join(", "));
        }
    }

    let mut plan = ChangePlan::new();

    for name in classification.names(Criterion::Removed) {
        let Some(pkg) = universe.installed(name) else {
            tracing::debug!("{name} is marked removed but nothing is installed");
            continue;
        };
        if let Err(e) = plan.mark_for_removal(&pkg.package.name, pkg.version(), true) {
            tracing::error!("Failed to remove {pkg}: {e}");
        }
    }

    let mut sorted = selection.clone();
    sorted.sort();
    tracing::debug!(
        "Solution: [{}]",
        sorted
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );

    for unit in &sorted {
        tracing::trace!(
            "package: {}, version: {}, installed: {}",
            unit.name,
            unit.ordinal,
            unit.installed
        );
        let Some(pkg) = universe.get_by_ordinal(&unit.name, unit.ordinal) else {
            tracing::warn!("Couldn't find {unit} in the universe");
            continue;
        };
        if classification.contains(Criterion::New, &unit.name)
            || classification.contains(Criterion::VersionChanged, &unit.name)
        {
            if let Err(e) = plan.add_package(&pkg.package.name, pkg.version(), true) {
                tracing::error!("Failed to add {pkg}: {e}");
            }
        }
    }

    if let Some(message) = plan.failed_message() {
        return Err(SolventError::Resolution {
            message: message.to_string(),
        });
    }
    plan.mark_success();
    Ok(plan)
}
