pub mod context;
pub mod ops_emit;
pub mod ops_reconcile;
pub mod ops_resolve;
pub mod ops_universe;

use solvent_core::plan::ChangePlan;
use solvent_util::errors::SolventError;

/// Render a change plan for the terminal, or as pretty-printed JSON.
pub fn render_plan(plan: &ChangePlan, json: bool) -> miette::Result<String> {
    if json {
        return serde_json::to_string_pretty(plan).map_err(|e| {
            SolventError::Generic {
                message: format!("Failed to serialize plan: {e}"),
            }
            .into()
        });
    }
    Ok(plan.to_string().trim_end().to_string())
}
