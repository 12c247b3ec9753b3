//! Set reconciliation by name identity.
//!
//! This module partitions a current and a desired collection of same-kind
//! resources into the groups that drive a plan: what to add, what to
//! delete, and what to keep and compare field by field.

use std::collections::HashSet;
use tracing::debug;

use crate::error::{DiffError, Result};
use crate::state::InfraTable;

/// A resource addressable by a unique name.
pub trait Named {
    /// Returns the resource name.
    fn name(&self) -> &str;
}

impl Named for InfraTable {
    fn name(&self) -> &str {
        Self::name(self)
    }
}

/// The outcome of partitioning current vs desired resources.
///
/// Every name appearing on either side lands in exactly one group. The
/// desired-side record is the representative for `to_keep`; callers that
/// need the current-side value look it up by name.
#[derive(Debug)]
pub struct Partition<'a, T> {
    /// Desired resources whose name exists on both sides.
    pub to_keep: Vec<&'a T>,
    /// Current resources absent from the desired side.
    pub to_delete: Vec<&'a T>,
    /// Desired resources absent from the current side.
    pub to_add: Vec<&'a T>,
}

impl<T> Partition<'_, T> {
    /// Returns the number of partitioned names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.to_keep.len() + self.to_delete.len() + self.to_add.len()
    }

    /// Returns true if both input collections were empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partitions two same-kind collections into keep/delete/add groups.
///
/// Input iteration order is preserved within each group.
///
/// # Errors
///
/// Returns a [`DiffError::DuplicateName`] if a name appears more than
/// once within one side.
pub fn reconcile<'a, T: Named>(current: &'a [T], desired: &'a [T]) -> Result<Partition<'a, T>> {
    let current_names = collect_names(current, "current state")?;
    let desired_names = collect_names(desired, "desired state")?;

    let to_add = desired
        .iter()
        .filter(|r| !current_names.contains(r.name()))
        .collect();
    let to_keep = desired
        .iter()
        .filter(|r| current_names.contains(r.name()))
        .collect();
    let to_delete = current
        .iter()
        .filter(|r| !desired_names.contains(r.name()))
        .collect();

    let partition = Partition {
        to_keep,
        to_delete,
        to_add,
    };
    debug!(
        "Partitioned {} names: {} keep, {} delete, {} add",
        partition.len(),
        partition.to_keep.len(),
        partition.to_delete.len(),
        partition.to_add.len()
    );
    Ok(partition)
}

/// Collects the name set of one side, faulting on duplicates.
fn collect_names<'a, T: Named>(side: &'a [T], scope: &str) -> Result<HashSet<&'a str>> {
    let mut names = HashSet::with_capacity(side.len());
    for resource in side {
        if !names.insert(resource.name()) {
            return Err(DiffError::duplicate(scope, resource.name()).into());
        }
    }
    Ok(names)
}
