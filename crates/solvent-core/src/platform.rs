//! Target platform compatibility.

use globset::Glob;

use crate::package::CatalogPackage;

/// Decides whether a remote package may be installed on a target platform.
pub trait PlatformFilter {
    fn is_compatible(&self, package: &CatalogPackage, target_platform: &str) -> bool;
}

/// Filter driven by each package's declared `target-platforms` patterns.
///
/// A package declaring no platform is compatible everywhere. Patterns use glob
/// syntax, so `cap-5.*` accepts `cap-5.6` and `cap-5.8`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclaredPlatforms;

impl PlatformFilter for DeclaredPlatforms {
    fn is_compatible(&self, package: &CatalogPackage, target_platform: &str) -> bool {
        if package.target_platforms.is_empty() {
            return true;
        }
        package
            .target_platforms
            .iter()
            .any(|pattern| pattern_matches(pattern, target_platform, package))
    }
}

fn pattern_matches(pattern: &str, target_platform: &str, package: &CatalogPackage) -> bool {
    if pattern == target_platform {
        return true;
    }
    match Glob::new(pattern) {
        Ok(glob) => glob.compile_matcher().is_match(target_platform),
        Err(e) => {
            tracing::warn!(
                "Ignoring invalid target platform '{pattern}' on {}: {e}",
                package.id()
            );
            false
        }
    }
}

