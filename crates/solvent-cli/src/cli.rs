//! CLI argument definitions for Solvent.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "solvent",
    version,
    about = "Bridge between a package catalog and an external dependency solver",
    long_about = "Solvent numbers every package version of a catalog, writes the \
                  resulting dependency problem for an external solver and turns the \
                  solver's answer into an install/remove plan."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub context: ContextArgs,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Overrides for values normally read from solvent.toml.
#[derive(Args, Debug)]
pub struct ContextArgs {
    /// Path to solvent.toml (default: search upwards from the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog file to read instead of the configured one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Target platform used to filter remote packages
    #[arg(long, global = true)]
    pub target_platform: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the version-to-ordinal mapping of the catalog
    Universe,

    /// Write the solver problem for the catalog and an optional request
    Emit {
        /// Request file with install/remove/upgrade goals
        #[arg(short, long)]
        request: Option<PathBuf>,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Turn a stored solver answer into a change plan
    Reconcile {
        /// Solver answer document (TOML)
        #[arg(short, long)]
        solution: PathBuf,
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a request with the configured solver
    Resolve {
        /// Request file with install/remove/upgrade goals
        #[arg(short, long)]
        request: Option<PathBuf>,
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
