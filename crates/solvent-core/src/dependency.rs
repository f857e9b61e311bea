use std::fmt;

use serde::{Deserialize, Serialize};

use crate::version::{Version, VersionRange};

/// A reference from one package to another: a target name plus the range of
/// acceptable versions.
///
/// Written as `name[:min[:max]]`, e.g. `"nuxeo-dm"`, `"nuxeo-dm:5.6"` or
/// `"nuxeo-dm:5.6:5.8"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackageDependency {
    pub name: String,
    pub range: VersionRange,
}

impl PackageDependency {
    /// A dependency accepting any version of `name`.
    pub fn any(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            range: VersionRange::any(),
        }
    }

    /// A dependency pinned to exactly one version of `name`.
    pub fn exact(name: impl Into<String>, version: &str) -> Self {
        Self {
            name: name.into(),
            range: VersionRange::exact(Version::parse(version)),
        }
    }

    /// Parse `"name[:min[:max]]"`. Returns `None` when the name is empty.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let (name, range) = match s.split_once(':') {
            Some((name, range)) => (name.trim(), VersionRange::parse(range)),
            None => (s, VersionRange::any()),
        };
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            range,
        })
    }
}

impl TryFrom<String> for PackageDependency {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s).ok_or_else(|| format!("invalid dependency '{s}': missing package name"))
    }
}

impl From<PackageDependency> for String {
    fn from(dep: PackageDependency) -> Self {
        dep.to_string()
    }
}

impl fmt::Display for PackageDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.range.is_any() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}:{}", self.name, self.range)
        }
    }
}
