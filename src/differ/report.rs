//! Diff report types.
//!
//! These types carry the classified outcome of one reconciliation run:
//! per-resource transitions, per-field changes, and the aggregate report
//! the CLI renders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::state::{InfraTable, ResourceKind};

/// The classified net change for one resource.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    /// Resource is new on the desired side.
    Create,
    /// Resource is gone from the desired side.
    Delete,
    /// Resource exists on both sides with differing fields.
    Update,
    /// Resource exists on both sides with no effective change.
    Unchanged,
}

/// One differing attribute between a current and a desired resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldChange {
    /// Name of the differing field.
    pub field_name: String,
    /// Value on the current side.
    pub old_value: Value,
    /// Value on the desired side.
    pub new_value: Value,
}

/// The diff for a single resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResourceDiff {
    /// Resource name.
    pub name: String,
    /// Resource kind.
    pub kind: ResourceKind,
    /// Current-side record; `None` exactly when the transition is Create.
    pub current: Option<InfraTable>,
    /// Desired-side record; `None` exactly when the transition is Delete.
    pub desired: Option<InfraTable>,
    /// Field-level changes; non-empty exactly when the transition is Update.
    pub field_changes: Vec<FieldChange>,
    /// Classified net change.
    pub transition: Transition,
}

/// Complete diff report for one reconciliation run.
///
/// Built once per run and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiffReport {
    /// When the report was computed.
    pub generated_at: DateTime<Utc>,
    /// All resource diffs, in kind-then-add/delete/keep order.
    pub diffs: Vec<ResourceDiff>,
    /// Number of resources to create.
    pub creates: usize,
    /// Number of resources to update.
    pub updates: usize,
    /// Number of resources to delete.
    pub deletes: usize,
    /// Number of unchanged resources.
    pub unchanged: usize,
}

impl ResourceDiff {
    /// Builds a Create diff for a resource that only exists on the
    /// desired side.
    #[must_use]
    pub fn creation(desired: InfraTable) -> Self {
        Self {
            name: desired.name().to_string(),
            kind: desired.kind(),
            current: None,
            desired: Some(desired),
            field_changes: vec![],
            transition: Transition::Create,
        }
    }

    /// Builds a Delete diff for a resource that only exists on the
    /// current side.
    #[must_use]
    pub fn deletion(current: InfraTable) -> Self {
        Self {
            name: current.name().to_string(),
            kind: current.kind(),
            current: Some(current),
            desired: None,
            field_changes: vec![],
            transition: Transition::Delete,
        }
    }

    /// Human-readable label for the resource kind.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.kind.label()
    }

    /// Returns true if this diff requires an action.
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        !matches!(self.transition, Transition::Unchanged)
    }
}

impl DiffReport {
    /// Builds a report from the per-resource diffs, computing summary
    /// counts.
    #[must_use]
    pub fn new(diffs: Vec<ResourceDiff>) -> Self {
        let creates = diffs
            .iter()
            .filter(|d| d.transition == Transition::Create)
            .count();
        let updates = diffs
            .iter()
            .filter(|d| d.transition == Transition::Update)
            .count();
        let deletes = diffs
            .iter()
            .filter(|d| d.transition == Transition::Delete)
            .count();
        let unchanged = diffs
            .iter()
            .filter(|d| d.transition == Transition::Unchanged)
            .count();

        Self {
            generated_at: Utc::now(),
            diffs,
            creates,
            updates,
            deletes,
            unchanged,
        }
    }

    /// Returns true if there are any changes.
    #[must_use]
    pub const fn has_changes(&self) -> bool {
        self.creates > 0 || self.updates > 0 || self.deletes > 0
    }

    /// Returns the total number of changes.
    #[must_use]
    pub const fn total_changes(&self) -> usize {
        self.creates + self.updates + self.deletes
    }

    /// Filters to only diffs that require action.
    #[must_use]
    pub fn actionable_diffs(&self) -> Vec<&ResourceDiff> {
        self.diffs.iter().filter(|d| d.is_actionable()).collect()
    }
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Create => "create",
            Self::Delete => "delete",
            Self::Update => "update",
            Self::Unchanged => "unchanged",
        };
        write!(f, "{s}")
    }
}

impl std::fmt::Display for FieldChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} -> {}", self.field_name, self.old_value, self.new_value)
    }
}

impl std::fmt::Display for ResourceDiff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.transition)?;
        if !self.field_changes.is_empty() {
            write!(f, " (")?;
            for (i, change) in self.field_changes.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", change.field_name)?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}
