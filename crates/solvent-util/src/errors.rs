use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all Solvent operations.
#[derive(Debug, Error, Diagnostic)]
pub enum SolventError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed configuration (e.g. solvent.toml).
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Check your solvent.toml for syntax errors"))]
    Config { message: String },

    /// The package catalog could not be read or parsed.
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    /// A dependency, conflict, provides or request reference names a package
    /// that is not part of the current universe.
    #[error("Missing mapping for {reference} with target platform {}", .target_platform.as_deref().unwrap_or("null"))]
    #[diagnostic(help("The package is unknown to the catalog or was filtered out by the target platform"))]
    UnmappedReference {
        reference: String,
        target_platform: Option<String>,
    },

    /// The solver found no satisfying assignment.
    #[error("No solution found.")]
    NoSolution,

    /// A single addition or removal could not be recorded in a change plan.
    #[error("Cannot assemble plan: {message}")]
    PlanAssembly { message: String },

    /// Dependency resolution failed as a whole.
    #[error("Dependency resolution failed: {message}")]
    Resolution { message: String },

    /// The external solver could not be run or returned garbage.
    #[error("Solver error: {message}")]
    Solver { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type SolventResult<T> = miette::Result<T>;
