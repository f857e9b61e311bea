//! Package version parsing, comparison, and range matching.
//!
//! Versions use a Maven-like ordering rather than strict semver:
//! - Segments are split on `.` and `-`
//! - Numeric segments compare as numbers
//! - String qualifiers have a special ordering:
//!   `alpha` < `beta` < `milestone` < `rc` < `snapshot` < `""` (release) < `sp`
//! - SNAPSHOT versions sort before their release equivalent

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A parsed package version with comparable segments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Version {
    pub original: String,
    segments: Vec<Segment>,
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

#[derive(Debug, Clone, Eq, PartialEq)]
enum Segment {
    Numeric(u64),
    Qualifier(QualifierKind),
    Text(String),
}

/// Well-known qualifiers with defined ordering.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
enum QualifierKind {
    Alpha,
    Beta,
    Milestone,
    Rc,
    Snapshot,
    Release,
    Sp,
}

impl Version {
    pub fn parse(version: &str) -> Self {
        let version = version.trim();
        Self {
            original: version.to_string(),
            segments: parse_segments(version),
        }
    }

    pub fn is_snapshot(&self) -> bool {
        self.original
            .rsplit_once('-')
            .is_some_and(|(_, tail)| tail.eq_ignore_ascii_case("SNAPSHOT"))
    }

    /// The version without its `-SNAPSHOT` suffix.
    pub fn base_version(&self) -> &str {
        if self.is_snapshot() {
            &self.original[..self.original.len() - "-SNAPSHOT".len()]
        } else {
            &self.original
        }
    }
}

impl From<String> for Version {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<&str> for Version {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<Version> for String {
    fn from(v: Version) -> Self {
        v.original
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let max_len = self.segments.len().max(other.segments.len());
        for i in 0..max_len {
            let ord = compare_segments(self.segments.get(i), other.segments.get(i));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn compare_segments(a: Option<&Segment>, b: Option<&Segment>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (Some(s), None) => compare_segment_to_empty(s),
        (None, Some(s)) => compare_segment_to_empty(s).reverse(),
        (Some(a), Some(b)) => compare_two_segments(a, b),
    }
}

fn compare_segment_to_empty(seg: &Segment) -> Ordering {
    match seg {
        Segment::Numeric(0) => Ordering::Equal,
        Segment::Numeric(_) => Ordering::Greater,
        Segment::Qualifier(q) => q.cmp(&QualifierKind::Release),
        Segment::Text(_) => Ordering::Less,
    }
}

fn compare_two_segments(a: &Segment, b: &Segment) -> Ordering {
    match (a, b) {
        (Segment::Numeric(a), Segment::Numeric(b)) => a.cmp(b),
        (Segment::Qualifier(a), Segment::Qualifier(b)) => a.cmp(b),
        (Segment::Numeric(_), _) => Ordering::Greater,
        (_, Segment::Numeric(_)) => Ordering::Less,
        (Segment::Text(a), Segment::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
        (Segment::Qualifier(q), Segment::Text(_)) => {
            if *q >= QualifierKind::Release {
                Ordering::Greater
            } else {
                Ordering::Less
            }
        }
        (Segment::Text(_), Segment::Qualifier(q)) => {
            if *q >= QualifierKind::Release {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        }
    }
}

fn parse_segments(version: &str) -> Vec<Segment> {
    version
        .split(['.', '-'])
        .filter(|token| !token.is_empty())
        .map(classify)
        .collect()
}

fn classify(token: &str) -> Segment {
    if let Ok(n) = token.parse::<u64>() {
        return Segment::Numeric(n);
    }
    match token.to_lowercase().as_str() {
        "alpha" | "a" => Segment::Qualifier(QualifierKind::Alpha),
        "beta" | "b" => Segment::Qualifier(QualifierKind::Beta),
        "milestone" | "m" => Segment::Qualifier(QualifierKind::Milestone),
        "rc" | "cr" => Segment::Qualifier(QualifierKind::Rc),
        "snapshot" => Segment::Qualifier(QualifierKind::Snapshot),
        "ga" | "final" | "release" => Segment::Qualifier(QualifierKind::Release),
        "sp" => Segment::Qualifier(QualifierKind::Sp),
        _ => Segment::Text(token.to_string()),
    }
}

/// An inclusive version range with independent, optional bounds.
///
/// Textual forms: `""` (any version), `"1.0"` (at least 1.0),
/// `"1.0:2.0"` (1.0 up to 2.0), `":2.0"` (at most 2.0).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionRange {
    pub min: Option<Version>,
    pub max: Option<Version>,
}

impl VersionRange {
    /// Any version.
    pub fn any() -> Self {
        Self::default()
    }

    /// Exactly one version.
    pub fn exact(version: Version) -> Self {
        Self {
            min: Some(version.clone()),
            max: Some(version),
        }
    }

    pub fn parse(range: &str) -> Self {
        let bound = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| Version::parse(s))
        };
        match range.split_once(':') {
            Some((min, max)) => Self {
                min: bound(min),
                max: bound(max),
            },
            None => Self {
                min: bound(range),
                max: None,
            },
        }
    }

    pub fn is_any(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Check if a version satisfies this range.
    pub fn contains(&self, version: &Version) -> bool {
        if self.min.as_ref().is_some_and(|min| version < min) {
            return false;
        }
        !self.max.as_ref().is_some_and(|max| version > max)
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.min, &self.max) {
            (None, None) => Ok(()),
            (Some(min), None) => write!(f, "{min}"),
            (None, Some(max)) => write!(f, ":{max}"),
            (Some(min), Some(max)) => write!(f, "{min}:{max}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_ordering() {
        assert!(Version::parse("1.0") < Version::parse("2.0"));
    }

    #[test]
    fn three_part_ordering() {
        let v1 = Version::parse("1.0.0");
        let v2 = Version::parse("1.0.1");
        let v3 = Version::parse("1.1.0");
        assert!(v1 < v2);
        assert!(v2 < v3);
    }

    #[test]
    fn numeric_not_lexicographic() {
        assert!(Version::parse("5.9") < Version::parse("5.10"));
    }

    #[test]
    fn qualifier_ordering() {
        let alpha = Version::parse("1.0-alpha");
        let beta = Version::parse("1.0-beta");
        let rc = Version::parse("1.0-rc");
        let release = Version::parse("1.0");
        let sp = Version::parse("1.0-sp");

        assert!(alpha < beta);
        assert!(beta < rc);
        assert!(rc < release);
        assert!(release < sp);
    }

    #[test]
    fn snapshot_before_release() {
        let snap = Version::parse("1.0-SNAPSHOT");
        let rel = Version::parse("1.0");
        assert!(snap < rel);
        assert!(Version::parse("0.9") < snap);
    }

    #[test]
    fn trailing_zeros_equal() {
        assert_eq!(Version::parse("1.0"), Version::parse("1.0.0"));
    }

    #[test]
    fn hotfix_text_qualifier() {
        let plain = Version::parse("5.6.0");
        let hotfix = Version::parse("5.6.0-HF01");
        assert!(plain > hotfix);
        assert!(Version::parse("5.6.0-HF01") < Version::parse("5.6.0-HF02"));
    }

    #[test]
    fn is_snapshot() {
        let v = Version::parse("1.0-SNAPSHOT");
        assert!(v.is_snapshot());
        assert_eq!(v.base_version(), "1.0");

        let lower = Version::parse("1.0-snapshot");
        assert!(lower.is_snapshot());

        let v2 = Version::parse("1.0.0");
        assert!(!v2.is_snapshot());
        assert_eq!(v2.base_version(), "1.0.0");
    }

    #[test]
    fn range_min_and_max() {
        let range = VersionRange::parse("1.0:2.0");
        assert!(range.contains(&Version::parse("1.0")));
        assert!(range.contains(&Version::parse("1.5")));
        assert!(range.contains(&Version::parse("2.0")));
        assert!(!range.contains(&Version::parse("0.9")));
        assert!(!range.contains(&Version::parse("2.1")));
    }

    #[test]
    fn range_min_only() {
        let range = VersionRange::parse("1.0");
        assert_eq!(range.min, Some(Version::parse("1.0")));
        assert!(range.max.is_none());
        assert!(range.contains(&Version::parse("42")));
    }

    #[test]
    fn range_max_only() {
        let range = VersionRange::parse(":2.0");
        assert!(range.min.is_none());
        assert!(range.contains(&Version::parse("0.1")));
        assert!(!range.contains(&Version::parse("2.0.1")));
    }

    #[test]
    fn empty_range_is_any() {
        assert!(VersionRange::parse("").is_any());
        assert!(VersionRange::parse(":").is_any());
    }

    #[test]
    fn range_display() {
        assert_eq!(VersionRange::parse("1.0:2.0").to_string(), "1.0:2.0");
        assert_eq!(VersionRange::parse("1.0").to_string(), "1.0");
        assert_eq!(VersionRange::parse(":2.0").to_string(), ":2.0");
        assert_eq!(VersionRange::any().to_string(), "");
    }
}
