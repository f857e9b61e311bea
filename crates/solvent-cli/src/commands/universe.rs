//! Handler for `solvent universe`.

use miette::Result;

use solvent_ops::context::ResolveContext;
use solvent_ops::ops_universe;

pub fn exec(ctx: &ResolveContext) -> Result<()> {
    let universe = ops_universe::universe(ctx)?;
    if universe.is_empty() {
        println!("Universe is empty");
    } else {
        print!("{}", ops_universe::render(&universe));
    }
    Ok(())
}
