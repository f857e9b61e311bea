//! Compile package dependencies into solver constraint expressions.
//!
//! Version bounds are replaced by the ordinals of the exact versions they
//! name. A bound whose version is not in the universe is treated as absent.

use solvent_core::dependency::PackageDependency;
use solvent_core::version::Version;
use solvent_util::errors::SolventError;

use crate::universe::Universe;

/// What to do with a reference to a name the universe does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPolicy {
    /// Abort compilation with [`SolventError::UnmappedReference`].
    Fail,
    /// Log a warning and drop the reference.
    Warn,
    /// Drop the reference, logging only at debug level.
    Ignore,
}

/// Compile `refs` into a comma-separated constraint list.
///
/// Every clause is joined with `, `, including the lower and upper clause of a
/// single bounded reference.
pub fn compile(
    universe: &Universe,
    refs: &[PackageDependency],
    on_missing: MissingPolicy,
) -> Result<String, SolventError> {
    let mut clauses: Vec<String> = Vec::new();
    for dep in refs {
        if !universe.contains_name(&dep.name) {
            handle_missing(universe, dep, on_missing)?;
            continue;
        }
        let min = bound_ordinal(universe, &dep.name, dep.range.min.as_ref());
        let max = bound_ordinal(universe, &dep.name, dep.range.max.as_ref());
        push_clauses(&mut clauses, &dep.name, min, max);
    }
    Ok(clauses.join(", "))
}

fn handle_missing(
    universe: &Universe,
    dep: &PackageDependency,
    on_missing: MissingPolicy,
) -> Result<(), SolventError> {
    let error = SolventError::UnmappedReference {
        reference: dep.to_string(),
        target_platform: universe.target_platform().map(str::to_string),
    };
    match on_missing {
        MissingPolicy::Fail => return Err(error),
        MissingPolicy::Warn => tracing::warn!("{error}"),
        MissingPolicy::Ignore => tracing::debug!("{error}"),
    }
    Ok(())
}

fn bound_ordinal(universe: &Universe, name: &str, bound: Option<&Version>) -> Option<u32> {
    universe.ordinal_of(name, bound?)
}

fn push_clauses(clauses: &mut Vec<String>, name: &str, min: Option<u32>, max: Option<u32>) {
    match (min, max) {
        (None, None) => clauses.push(name.to_string()),
        (Some(min), Some(max)) if min == max => clauses.push(format!("{name} = {min}")),
        _ => {
            if let Some(min) = min {
                clauses.push(format!("{name} >= {min}"));
            }
            if let Some(max) = max {
                clauses.push(format!("{name} <= {max}"));
            }
        }
    }
}
