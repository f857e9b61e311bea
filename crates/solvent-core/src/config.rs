use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use solvent_util::errors::SolventError;

/// Name of the configuration file looked up from the working directory upwards.
pub const CONFIG_FILE: &str = "solvent.toml";

/// Resolver configuration loaded from `solvent.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ResolverConfig {
    /// Remote packages incompatible with this platform are left out of the universe.
    #[serde(default)]
    pub target_platform: Option<String>,

    /// Catalog file, relative to the directory holding `solvent.toml`.
    #[serde(default = "default_catalog")]
    pub catalog: String,

    #[serde(default)]
    pub solver: SolverConfig,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            target_platform: None,
            catalog: default_catalog(),
            solver: SolverConfig::default(),
        }
    }
}

fn default_catalog() -> String {
    "catalog.toml".to_string()
}

/// External solver invocation from `[solver]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolverConfig {
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

impl ResolverConfig {
    /// Load and parse a `solvent.toml` file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SolventError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::from_str(&content)
    }

    /// Parse a `solvent.toml` from a string.
    pub fn from_str(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            SolventError::Config {
                message: format!("Failed to parse {CONFIG_FILE}: {e}"),
            }
            .into()
        })
    }

    /// Find `solvent.toml` in `start` or one of its ancestors.
    ///
    /// Returns the configuration together with the directory it was found in.
    /// Without a configuration file, defaults are returned relative to `start`.
    pub fn discover(start: &Path) -> miette::Result<(Self, PathBuf)> {
        match solvent_util::fs::find_ancestor_with(start, CONFIG_FILE) {
            Some(root) => {
                tracing::debug!("Using {}", root.join(CONFIG_FILE).display());
                Ok((Self::from_path(&root.join(CONFIG_FILE))?, root))
            }
            None => Ok((Self::default(), start.to_path_buf())),
        }
    }

    /// Absolute path of the catalog file for a configuration rooted at `root`.
    pub fn catalog_path(&self, root: &Path) -> PathBuf {
        root.join(&self.catalog)
    }
}
