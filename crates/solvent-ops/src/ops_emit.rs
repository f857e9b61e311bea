//! Operation: write the solver problem for the catalog and an optional request.

use std::path::{Path, PathBuf};

use solvent_core::platform::DeclaredPlatforms;
use solvent_core::request::Request;
use solvent_util::errors::SolventError;
use solvent_util::fs::write_with_parents;

use crate::context::ResolveContext;

/// Where the problem text went.
pub enum EmitResult {
    /// Written to a file; holds the path and the number of package stanzas.
    Written(PathBuf, usize),
    /// Returned for printing.
    Text(String),
}

/// Render the problem and write it to `output` when given.
pub fn emit(
    ctx: &ResolveContext,
    request: Option<&Request>,
    output: Option<&Path>,
) -> miette::Result<EmitResult> {
    let mut resolver = ctx.resolver();
    let problem = resolver.problem(&ctx.catalog, &DeclaredPlatforms, request)?;

    match output {
        Some(path) => {
            write_with_parents(path, &problem).map_err(SolventError::Io)?;
            tracing::debug!("Wrote problem to {}", path.display());
            Ok(EmitResult::Written(
                path.to_path_buf(),
                resolver.universe().len(),
            ))
        }
        None => Ok(EmitResult::Text(problem)),
    }
}
