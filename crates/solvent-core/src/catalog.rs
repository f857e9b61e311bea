//! Package catalog: the full list of local and remote packages that a
//! resolution session maps into its universe.

use std::path::Path;

use serde::{Deserialize, Serialize};
use solvent_util::errors::SolventError;

use crate::package::CatalogPackage;

/// Source of every package known to the package manager.
///
/// Queried once per universe rebuild.
pub trait CatalogProvider {
    fn list_all_packages(&self) -> Vec<CatalogPackage>;
}

/// A catalog stored as a TOML document of `[[package]]` tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub package: Vec<CatalogPackage>,
}

impl Catalog {
    pub fn new(package: Vec<CatalogPackage>) -> Self {
        Self { package }
    }

    /// Load and parse a catalog file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SolventError::Catalog {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::from_str(&content)
    }

    /// Parse a catalog from a TOML string.
    pub fn from_str(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            SolventError::Catalog {
                message: format!("Failed to parse catalog: {e}"),
            }
            .into()
        })
    }

    pub fn len(&self) -> usize {
        self.package.len()
    }

    pub fn is_empty(&self) -> bool {
        self.package.is_empty()
    }
}

impl CatalogProvider for Catalog {
    fn list_all_packages(&self) -> Vec<CatalogPackage> {
        self.package.clone()
    }
}

impl CatalogProvider for Vec<CatalogPackage> {
    fn list_all_packages(&self) -> Vec<CatalogPackage> {
        self.clone()
    }
}
