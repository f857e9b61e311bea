//! Handler for `solvent resolve`.

use std::path::Path;

use miette::Result;

use solvent_core::request::Request;
use solvent_ops::context::{load_request, ResolveContext};
use solvent_ops::{ops_resolve, render_plan};

pub fn exec(ctx: &ResolveContext, cwd: &Path, request: Option<&Path>, json: bool) -> Result<()> {
    let request = load_request(cwd, request)?.unwrap_or_else(Request::new);
    let plan = ops_resolve::resolve(ctx, &request)?;
    println!("{}", render_plan(&plan, json)?);
    Ok(())
}
