//! Handler for `solvent emit`.

use std::path::Path;

use miette::Result;

use solvent_ops::context::{load_request, ResolveContext};
use solvent_ops::ops_emit::{self, EmitResult};

pub fn exec(
    ctx: &ResolveContext,
    cwd: &Path,
    request: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    let request = load_request(cwd, request)?;
    let output = output.map(|p| cwd.join(p));

    match ops_emit::emit(ctx, request.as_ref(), output.as_deref())? {
        EmitResult::Written(path, stanzas) => {
            println!("Wrote {stanzas} package stanzas to {}", path.display());
        }
        EmitResult::Text(problem) => print!("{problem}"),
    }
    Ok(())
}
