//! Command dispatch and handler modules.

mod emit;
mod reconcile;
mod resolve;
mod universe;

use std::path::Path;

use miette::Result;
use solvent_ops::context::{ContextOptions, ResolveContext};
use solvent_util::errors::SolventError;

use crate::cli::{Cli, Command, ContextArgs};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().map_err(SolventError::Io)?;
    let ctx = load_context(&cwd, cli.context)?;
    match cli.command {
        Command::Universe => universe::exec(&ctx),
        Command::Emit { request, output } => {
            emit::exec(&ctx, &cwd, request.as_deref(), output.as_deref())
        }
        Command::Reconcile { solution, json } => reconcile::exec(&ctx, &cwd.join(solution), json),
        Command::Resolve { request, json } => resolve::exec(&ctx, &cwd, request.as_deref(), json),
    }
}

fn load_context(cwd: &Path, args: ContextArgs) -> Result<ResolveContext> {
    let opts = ContextOptions {
        config: args.config,
        catalog: args.catalog,
        target_platform: args.target_platform,
    };
    ResolveContext::load(cwd, &opts)
}
