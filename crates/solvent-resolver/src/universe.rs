//! Version universe: maps every (package name, version) pair to a per-name
//! integer ordinal that the solver can compare.
//!
//! Ordinals are assigned in ascending version order starting at 1, so ordinal
//! comparisons agree with version comparisons within one name. The composite
//! key `name-ordinal` identifies a package across the whole universe.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use solvent_core::catalog::CatalogProvider;
use solvent_core::package::CatalogPackage;
use solvent_core::platform::PlatformFilter;
use solvent_core::version::Version;

/// A catalog package admitted into the universe.
#[derive(Debug, Clone)]
pub struct UniversePackage {
    pub universe_name: String,
    pub ordinal: u32,
    pub package: CatalogPackage,
}

impl UniversePackage {
    pub fn version(&self) -> &Version {
        &self.package.version
    }

    pub fn installed(&self) -> bool {
        self.package.installed
    }

    /// Globally unique `universe_name-ordinal` key.
    pub fn composite_key(&self) -> String {
        composite_key(&self.universe_name, self.ordinal)
    }
}

impl fmt::Display for UniversePackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} = {})",
            self.package.id(),
            self.universe_name,
            self.ordinal
        )
    }
}

/// Build the reverse-index key for `name` at `ordinal`.
pub fn composite_key(universe_name: &str, ordinal: u32) -> String {
    format!("{universe_name}-{ordinal}")
}

/// Name under which a package's versions are numbered.
///
/// A classifier splits a package into its own line (`name-classifier`).
/// Snapshot markers stay on their release line, so `HF01-SNAPSHOT` numbers
/// with `HF01` and a bare `SNAPSHOT` with the plain name.
pub fn universe_name(package: &CatalogPackage) -> String {
    match package.line_classifier() {
        Some(classifier) => format!("{}-{classifier}", package.name),
        None => package.name.clone(),
    }
}

/// Two-way mapping between packages and ordinals for one resolution session.
///
/// Packages live in an arena in rebuild order (grouped by name, ascending
/// ordinal). The forward index maps a name to its versions, the reverse index
/// maps composite keys to arena slots.
#[derive(Debug, Default)]
pub struct Universe {
    packages: Vec<UniversePackage>,
    by_name: BTreeMap<String, BTreeMap<Version, usize>>,
    by_key: HashMap<String, usize>,
    target_platform: Option<String>,
}

impl Universe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a fresh universe from a catalog.
    pub fn build(
        catalog: &dyn CatalogProvider,
        target_platform: Option<&str>,
        filter: &dyn PlatformFilter,
    ) -> Self {
        let mut universe = Self::new();
        universe.rebuild(catalog, target_platform, filter);
        universe
    }

    /// Clear the universe and repopulate it from the catalog.
    ///
    /// Remote packages incompatible with `target_platform` are skipped; local
    /// packages are always kept. When two catalog entries share a name and
    /// version, the later one wins.
    pub fn rebuild(
        &mut self,
        catalog: &dyn CatalogProvider,
        target_platform: Option<&str>,
        filter: &dyn PlatformFilter,
    ) {
        self.packages.clear();
        self.by_name.clear();
        self.by_key.clear();
        self.target_platform = target_platform.map(str::to_string);

        let mut groups: BTreeMap<String, BTreeMap<Version, CatalogPackage>> = BTreeMap::new();
        let mut skipped = 0usize;
        for pkg in catalog.list_all_packages() {
            if let Some(platform) = target_platform {
                if !pkg.local && !filter.is_compatible(&pkg, platform) {
                    tracing::trace!("{} is not compatible with {platform}", pkg.id());
                    skipped += 1;
                    continue;
                }
            }
            groups
                .entry(universe_name(&pkg))
                .or_default()
                .insert(pkg.version.clone(), pkg);
        }

        for (name, versions) in groups {
            let mut slots = BTreeMap::new();
            for (ordinal, (version, package)) in (1u32..).zip(versions) {
                let slot = self.packages.len();
                let entry = UniversePackage {
                    universe_name: name.clone(),
                    ordinal,
                    package,
                };
                self.by_key.insert(entry.composite_key(), slot);
                self.packages.push(entry);
                slots.insert(version, slot);
            }
            self.by_name.insert(name, slots);
        }

        tracing::debug!(
            "Universe rebuilt: {} packages under {} names ({skipped} incompatible with target platform)",
            self.packages.len(),
            self.by_name.len()
        );
        if tracing::enabled!(tracing::Level::DEBUG) {
            for pkg in &self.packages {
                tracing::debug!("  {} -> {}", pkg.package.id(), pkg.composite_key());
            }
        }
    }

    pub fn target_platform(&self) -> Option<&str> {
        self.target_platform.as_deref()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// All packages in rebuild order.
    pub fn iter(&self) -> impl Iterator<Item = &UniversePackage> {
        self.packages.iter()
    }

    /// Universe names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }

    pub fn contains_name(&self, universe_name: &str) -> bool {
        self.by_name.contains_key(universe_name)
    }

    /// Every version of `universe_name`, ascending.
    pub fn versions(
        &self,
        universe_name: &str,
    ) -> Option<impl Iterator<Item = &UniversePackage> + '_> {
        self.by_name
            .get(universe_name)
            .map(|slots| slots.values().map(|&slot| &self.packages[slot]))
    }

    /// Ordinal of the exact `version` of `universe_name`, if it is in the universe.
    pub fn ordinal_of(&self, universe_name: &str, version: &Version) -> Option<u32> {
        let slot = *self.by_name.get(universe_name)?.get(version)?;
        Some(self.packages[slot].ordinal)
    }

    /// Reverse lookup by composite key.
    pub fn get(&self, composite_key: &str) -> Option<&UniversePackage> {
        self.by_key.get(composite_key).map(|&slot| &self.packages[slot])
    }

    pub fn get_by_ordinal(&self, universe_name: &str, ordinal: u32) -> Option<&UniversePackage> {
        self.get(&composite_key(universe_name, ordinal))
    }

    /// The installed version of `universe_name`, if any.
    pub fn installed(&self, universe_name: &str) -> Option<&UniversePackage> {
        self.versions(universe_name)?.find(|pkg| pkg.installed())
    }
}
