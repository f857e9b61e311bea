//! The solver's answer: a selection of (name, ordinal) pairs plus the
//! classification of selected names into change buckets.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Deserialize;
use solvent_util::errors::SolventError;

/// One package version picked by the solver.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
pub struct SelectedUnit {
    #[serde(rename = "package")]
    pub name: String,
    #[serde(rename = "version")]
    pub ordinal: u32,
    #[serde(default)]
    pub installed: bool,
}

impl SelectedUnit {
    pub fn new(name: impl Into<String>, ordinal: u32) -> Self {
        Self {
            name: name.into(),
            ordinal,
            installed: false,
        }
    }
}

impl fmt::Display for SelectedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.ordinal)
    }
}

/// Change buckets reported by the solver.
///
/// Only `New`, `Removed` and `VersionChanged` affect a change plan; the others
/// are informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Criterion {
    New,
    Removed,
    NotUpToDate,
    Recommended,
    VersionChanged,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::New,
        Criterion::Removed,
        Criterion::NotUpToDate,
        Criterion::Recommended,
        Criterion::VersionChanged,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Criterion::New => "new",
            Criterion::Removed => "removed",
            Criterion::NotUpToDate => "not up-to-date",
            Criterion::Recommended => "recommended",
            Criterion::VersionChanged => "version changed",
        }
    }
}

/// Package names per change bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    buckets: BTreeMap<Criterion, BTreeSet<String>>,
}

impl Classification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, criterion: Criterion, name: impl Into<String>) -> Self {
        self.insert(criterion, name);
        self
    }

    pub fn insert(&mut self, criterion: Criterion, name: impl Into<String>) {
        self.buckets.entry(criterion).or_default().insert(name.into());
    }

    pub fn contains(&self, criterion: Criterion, name: &str) -> bool {
        self.buckets
            .get(&criterion)
            .is_some_and(|names| names.contains(name))
    }

    /// Names in `criterion`, sorted.
    pub fn names(&self, criterion: Criterion) -> impl Iterator<Item = &str> {
        self.buckets
            .get(&criterion)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.values().all(BTreeSet::is_empty)
    }
}

/// Everything the solver returned for one problem.
///
/// `selection` is `None` when the problem has no solution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolverOutcome {
    pub selection: Option<Vec<SelectedUnit>>,
    pub classification: Classification,
}

/// On-disk answer document.
#[derive(Debug, Deserialize)]
struct AnswerDocument {
    #[serde(default = "default_satisfiable")]
    satisfiable: bool,
    #[serde(default)]
    selected: Vec<SelectedUnit>,
    #[serde(default)]
    classification: ClassificationDocument,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct ClassificationDocument {
    #[serde(default)]
    new: Vec<String>,
    #[serde(default)]
    removed: Vec<String>,
    #[serde(default)]
    not_up_to_date: Vec<String>,
    #[serde(default)]
    recommended: Vec<String>,
    #[serde(default)]
    version_changed: Vec<String>,
}

impl From<ClassificationDocument> for Classification {
    fn from(doc: ClassificationDocument) -> Self {
        let mut classification = Classification::new();
        let buckets = [
            (Criterion::New, doc.new),
            (Criterion::Removed, doc.removed),
            (Criterion::NotUpToDate, doc.not_up_to_date),
            (Criterion::Recommended, doc.recommended),
            (Criterion::VersionChanged, doc.version_changed),
        ];
        for (criterion, names) in buckets {
            for name in names {
                classification.insert(criterion, name);
            }
        }
        classification
    }
}

fn default_satisfiable() -> bool {
    true
}

impl SolverOutcome {
    pub fn solved(selection: Vec<SelectedUnit>, classification: Classification) -> Self {
        Self {
            selection: Some(selection),
            classification,
        }
    }

    pub fn unsatisfiable() -> Self {
        Self::default()
    }

    /// Parse a TOML answer document.
    ///
    /// ```toml
    /// satisfiable = true
    /// [[selected]]
    /// package = "A"
    /// version = 3
    /// [classification]
    /// version-changed = ["A"]
    /// ```
    pub fn from_toml(content: &str) -> Result<Self, SolventError> {
        let doc: AnswerDocument = toml::from_str(content).map_err(|e| SolventError::Solver {
            message: format!("Failed to parse solver answer: {e}"),
        })?;
        let selection = doc.satisfiable.then_some(doc.selected);
        Ok(Self {
            selection,
            classification: doc.classification.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_satisfiable_answer() {
        let outcome = SolverOutcome::from_toml(
            r#"
satisfiable = true

[[selected]]
package = "A"
version = 3

[[selected]]
package = "B"
version = 1
installed = true

[classification]
version-changed = ["A"]
not-up-to-date = ["B"]
"#,
        )
        .unwrap();
        let selection = outcome.selection.unwrap();
        assert_eq!(selection.len(), 2);
        assert_eq!(selection[0], SelectedUnit::new("A", 3));
        assert!(selection[1].installed);
        assert!(outcome.classification.contains(Criterion::VersionChanged, "A"));
        assert!(outcome.classification.contains(Criterion::NotUpToDate, "B"));
        assert!(!outcome.classification.contains(Criterion::New, "A"));
    }

    #[test]
    fn unsatisfiable_answer_has_no_selection() {
        let outcome = SolverOutcome::from_toml("satisfiable = false\n").unwrap();
        assert!(outcome.selection.is_none());
    }

    #[test]
    fn empty_answer_is_an_empty_selection() {
        let outcome = SolverOutcome::from_toml("").unwrap();
        assert_eq!(outcome.selection, Some(Vec::new()));
        assert!(outcome.classification.is_empty());
    }

    #[test]
    fn garbage_is_a_solver_error() {
        let err = SolverOutcome::from_toml("selected = 12").unwrap_err();
        assert!(matches!(err, SolventError::Solver { .. }));
    }

    #[test]
    fn units_sort_by_name_then_ordinal() {
        let mut units = vec![
            SelectedUnit::new("B", 1),
            SelectedUnit::new("A", 2),
            SelectedUnit::new("A", 1),
        ];
        units.sort();
        let rendered: Vec<String> = units.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["A = 1", "A = 2", "B = 1"]);
    }

    #[test]
    fn bucket_names_are_sorted() {
        let classification = Classification::new()
            .with(Criterion::Removed, "z")
            .with(Criterion::Removed, "a");
        assert_eq!(
            classification.names(Criterion::Removed).collect::<Vec<_>>(),
            vec!["a", "z"]
        );
        assert_eq!(classification.names(Criterion::New).count(), 0);
    }
}
