//! The boundary to the external constraint solver.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use solvent_core::config::SolverConfig;
use solvent_util::errors::SolventError;
use solvent_util::process::CommandBuilder;

use crate::solution::SolverOutcome;

/// Solves a problem written in the stanza format.
///
/// Implementations block until the solver has answered.
pub trait Solver {
    fn solve(&self, problem: &str) -> Result<SolverOutcome, SolventError>;
}

/// Runs an external solver program.
///
/// The problem is written to the program's stdin and its stdout is parsed as
/// a TOML answer document (see [`SolverOutcome::from_toml`]).
#[derive(Debug, Clone)]
pub struct CommandSolver {
    program: String,
    args: Vec<String>,
    env: BTreeMap<String, String>,
    cwd: Option<PathBuf>,
}

impl CommandSolver {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: BTreeMap::new(),
            cwd: None,
        }
    }

    /// Build a solver from `[solver]` configuration, run from `root`.
    pub fn from_config(config: &SolverConfig, root: &Path) -> Result<Self, SolventError> {
        let program = config.command.clone().ok_or_else(|| SolventError::Config {
            message: "no solver configured: set `command` in the [solver] section".to_string(),
        })?;
        Ok(Self {
            program,
            args: config.args.clone(),
            env: config.env.clone(),
            cwd: Some(root.to_path_buf()),
        })
    }

    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl Solver for CommandSolver {
    fn solve(&self, problem: &str) -> Result<SolverOutcome, SolventError> {
        tracing::debug!("Running solver {} {}", self.program, self.args.join(" "));
        let mut cmd = CommandBuilder::new(&self.program)
            .args(&self.args)
            .stdin(problem);
        for (key, value) in &self.env {
            cmd = cmd.env(key, value);
        }
        if let Some(dir) = &self.cwd {
            cmd = cmd.cwd(dir.to_string_lossy());
        }

        let output = cmd.exec().map_err(|e| SolventError::Solver {
            message: format!("failed to run {}: {e}", self.program),
        })?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SolventError::Solver {
                message: format!("{} exited with {}: {}", self.program, output.status, stderr.trim()),
            });
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        SolverOutcome::from_toml(&stdout)
    }
}
