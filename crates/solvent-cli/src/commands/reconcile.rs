//! Handler for `solvent reconcile`.

use std::path::Path;

use miette::Result;

use solvent_ops::context::ResolveContext;
use solvent_ops::{ops_reconcile, render_plan};

pub fn exec(ctx: &ResolveContext, solution: &Path, json: bool) -> Result<()> {
    let plan = ops_reconcile::reconcile(ctx, solution)?;
    println!("{}", render_plan(&plan, json)?);
    Ok(())
}
