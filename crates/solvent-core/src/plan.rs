//! Change plans: the install/remove actions produced by a resolution.

use std::fmt;

use serde::Serialize;
use solvent_util::errors::SolventError;

use crate::version::Version;

/// One planned addition or removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedChange {
    pub name: String,
    pub version: Version,
    /// Apply even if the change looks redundant (e.g. reinstalling the same
    /// version).
    pub force: bool,
}

impl PlannedChange {
    /// `name-version` identifier.
    pub fn id(&self) -> String {
        format!("{}-{}", self.name, self.version)
    }
}

impl fmt::Display for PlannedChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)?;
        if self.force {
            f.write_str(" (forced)")?;
        }
        Ok(())
    }
}

/// Lifecycle of a plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "lowercase")]
pub enum PlanState {
    #[default]
    Pending,
    Success,
    Failed(String),
}

/// The outcome of a resolution: packages to add and packages to remove.
///
/// A plan only grows; entries that contradict what is already planned are
/// rejected and put the whole plan into the failed state.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChangePlan {
    additions: Vec<PlannedChange>,
    removals: Vec<PlannedChange>,
    #[serde(flatten)]
    state: PlanState,
}

impl ChangePlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn additions(&self) -> &[PlannedChange] {
        &self.additions
    }

    pub fn removals(&self) -> &[PlannedChange] {
        &self.removals
    }

    pub fn state(&self) -> &PlanState {
        &self.state
    }

    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.removals.is_empty()
    }

    /// Plan the installation of `name` at `version`.
    ///
    /// Adding the same entry twice is a no-op. Adding a second version of an
    /// already planned package, or a package identical to a planned removal,
    /// fails the plan.
    pub fn add_package(
        &mut self,
        name: &str,
        version: &Version,
        force: bool,
    ) -> Result<(), SolventError> {
        if let Some(existing) = self.additions.iter().find(|c| c.name == name) {
            if existing.version == *version {
                return Ok(());
            }
            let message = format!(
                "cannot add {name}-{version}: {} is already planned for installation",
                existing.id()
            );
            return Err(self.reject(message));
        }
        if self
            .removals
            .iter()
            .any(|c| c.name == name && c.version == *version)
        {
            let message = format!("cannot add {name}-{version}: it is planned for removal");
            return Err(self.reject(message));
        }
        self.additions.push(PlannedChange {
            name: name.to_string(),
            version: version.clone(),
            force,
        });
        Ok(())
    }

    /// Plan the removal of `name` at `version`.
    pub fn mark_for_removal(
        &mut self,
        name: &str,
        version: &Version,
        force: bool,
    ) -> Result<(), SolventError> {
        if let Some(existing) = self.removals.iter().find(|c| c.name == name) {
            if existing.version == *version {
                return Ok(());
            }
            let message = format!(
                "cannot remove {name}-{version}: {} is already planned for removal",
                existing.id()
            );
            return Err(self.reject(message));
        }
        if self
            .additions
            .iter()
            .any(|c| c.name == name && c.version == *version)
        {
            let message = format!("cannot remove {name}-{version}: it is planned for installation");
            return Err(self.reject(message));
        }
        self.removals.push(PlannedChange {
            name: name.to_string(),
            version: version.clone(),
            force,
        });
        Ok(())
    }

    fn reject(&mut self, message: String) -> SolventError {
        self.mark_failed(message.clone());
        SolventError::PlanAssembly { message }
    }

    /// Fail the plan. The first failure message is kept.
    pub fn mark_failed(&mut self, message: impl Into<String>) {
        if !self.is_failed() {
            self.state = PlanState::Failed(message.into());
        }
    }

    /// Mark a pending plan as successfully resolved. Has no effect on a failed plan.
    pub fn mark_success(&mut self) {
        if self.state == PlanState::Pending {
            self.state = PlanState::Success;
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, PlanState::Failed(_))
    }

    pub fn is_success(&self) -> bool {
        self.state == PlanState::Success
    }

    pub fn failed_message(&self) -> Option<&str> {
        match &self.state {
            PlanState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Replace the order of additions and removals.
    ///
    /// Both lists must be permutations of the current ones.
    pub fn reorder(
        &mut self,
        additions: Vec<PlannedChange>,
        removals: Vec<PlannedChange>,
    ) -> Result<(), SolventError> {
        if !same_entries(&self.additions, &additions) || !same_entries(&self.removals, &removals) {
            return Err(SolventError::PlanAssembly {
                message: "reordered plan does not contain the planned entries".to_string(),
            });
        }
        self.additions = additions;
        self.removals = removals;
        Ok(())
    }
}

fn same_entries(current: &[PlannedChange], proposed: &[PlannedChange]) -> bool {
    current.len() == proposed.len() && current.iter().all(|c| proposed.contains(c))
}

impl fmt::Display for ChangePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(message) = self.failed_message() {
            return write!(f, "Resolution failed: {message}");
        }
        if self.is_empty() {
            return write!(f, "Nothing to do.");
        }
        if !self.removals.is_empty() {
            writeln!(f, "Remove ({}):", self.removals.len())?;
            for change in &self.removals {
                writeln!(f, "  {change}")?;
            }
        }
        if !self.additions.is_empty() {
            writeln!(f, "Install ({}):", self.additions.len())?;
            for change in &self.additions {
                writeln!(f, "  {change}")?;
            }
        }
        Ok(())
    }
}
