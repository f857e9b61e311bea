use serde::{Deserialize, Serialize};

use crate::dependency::PackageDependency;
use crate::version::Version;

/// A package as listed by the catalog, either installed locally or offered by
/// a remote catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CatalogPackage {
    pub name: String,
    pub version: Version,
    #[serde(default)]
    pub classifier: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<PackageDependency>,
    #[serde(default)]
    pub conflicts: Vec<PackageDependency>,
    #[serde(default)]
    pub provides: Vec<PackageDependency>,
    /// Platform patterns this package targets. Empty means every platform.
    #[serde(default)]
    pub target_platforms: Vec<String>,
    #[serde(default)]
    pub installed: bool,
    /// Whether the package is known locally (already downloaded or installed)
    /// as opposed to only being offered by a remote catalog.
    #[serde(default)]
    pub local: bool,
}

impl CatalogPackage {
    /// A bare package with no relations, remote and not installed.
    pub fn new(name: impl Into<String>, version: &str) -> Self {
        Self {
            name: name.into(),
            version: Version::parse(version),
            classifier: None,
            dependencies: Vec::new(),
            conflicts: Vec::new(),
            provides: Vec::new(),
            target_platforms: Vec::new(),
            installed: false,
            local: false,
        }
    }

    /// `name-version` identifier.
    pub fn id(&self) -> String {
        format!("{}-{}", self.name, self.version)
    }

    /// The classifier naming this package's release line.
    ///
    /// A trailing `-SNAPSHOT` (any case) is not part of the line, so
    /// `HF01-SNAPSHOT` belongs to `HF01` and a bare `SNAPSHOT` to no
    /// classifier at all.
    pub fn line_classifier(&self) -> Option<&str> {
        let classifier = self.classifier.as_deref()?;
        let line = if classifier.eq_ignore_ascii_case("SNAPSHOT") {
            ""
        } else {
            match classifier.len().checked_sub("-SNAPSHOT".len()) {
                Some(cut)
                    if classifier.is_char_boundary(cut)
                        && classifier[cut..].eq_ignore_ascii_case("-SNAPSHOT") =>
                {
                    &classifier[..cut]
                }
                _ => classifier,
            }
        };
        (!line.is_empty()).then_some(line)
    }
}
