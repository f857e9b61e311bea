use std::path::Path;

use serde::{Deserialize, Serialize};
use solvent_util::errors::SolventError;

use crate::dependency::PackageDependency;

/// Explicit goals of a resolution: what the user asked to install, remove or
/// upgrade.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub install: Vec<PackageDependency>,
    #[serde(default)]
    pub remove: Vec<PackageDependency>,
    #[serde(default)]
    pub upgrade: Vec<PackageDependency>,
}

impl Request {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn install(mut self, dep: PackageDependency) -> Self {
        self.install.push(dep);
        self
    }

    pub fn remove(mut self, dep: PackageDependency) -> Self {
        self.remove.push(dep);
        self
    }

    pub fn upgrade(mut self, dep: PackageDependency) -> Self {
        self.upgrade.push(dep);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.install.is_empty() && self.remove.is_empty() && self.upgrade.is_empty()
    }

    /// Load and parse a request file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SolventError::Generic {
            message: format!("Failed to read request {}: {e}", path.display()),
        })?;
        toml::from_str(&content).map_err(|e| {
            SolventError::Generic {
                message: format!("Failed to parse request: {e}"),
            }
            .into()
        })
    }
}
