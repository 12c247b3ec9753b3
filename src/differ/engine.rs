//! Diff engine for comparing current vs desired state.
//!
//! This module drives the set reconciler and the field differ across every
//! known resource kind and assembles the results into one ordered report.

use std::collections::HashMap;
use tracing::debug;

use crate::error::Result;
use crate::state::{InfraState, InfraTable, ResourceKind};

use super::field::diff_between;
use super::reconcile::reconcile;
use super::report::{DiffReport, ResourceDiff};

/// Engine for computing diffs between current and desired states.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiffEngine;

impl DiffEngine {
    /// Creates a new diff engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Computes the diff between a current and a desired state.
    ///
    /// Kinds are visited in [`ResourceKind::ALL`] order; within each kind
    /// the report lists additions, then deletions, then kept resources,
    /// so output is deterministic for a given pair of states.
    ///
    /// # Errors
    ///
    /// Returns an error if either state holds duplicate resource names
    /// within one kind.
    pub fn compute_diff(&self, current: &InfraState, desired: &InfraState) -> Result<DiffReport> {
        let mut diffs = Vec::new();

        for kind in ResourceKind::ALL {
            let current_resources = current.resources_of(kind);
            let desired_resources = desired.resources_of(kind);
            debug!(
                "Diffing {}: {} current, {} desired",
                kind,
                current_resources.len(),
                desired_resources.len()
            );

            let partition = reconcile(&current_resources, &desired_resources)?;

            // Name index built once per kind; keep-matching stays linear.
            let current_by_name: HashMap<&str, &InfraTable> = current_resources
                .iter()
                .map(|r| (r.name(), r))
                .collect();

            for resource in partition.to_add {
                diffs.push(ResourceDiff::creation(resource.clone()));
            }
            for resource in partition.to_delete {
                diffs.push(ResourceDiff::deletion(resource.clone()));
            }
            for resource in partition.to_keep {
                let Some(existing) = current_by_name.get(resource.name()) else {
                    unreachable!(
                        "resource '{}' tagged keep without a current-side match",
                        resource.name()
                    );
                };
                diffs.push(diff_between(existing, resource));
            }
        }

        Ok(DiffReport::new(diffs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::differ::report::Transition;
    use crate::state::{DynamoTable, SqliteTable};
    use serde_json::json;

    fn dynamo(project: &str, name: &str, ttl: Option<u64>) -> InfraTable {
        InfraTable::Dynamo(DynamoTable {
            project: project.to_string(),
            name: name.to_string(),
            region: String::from("us-east"),
            ttl,
        })
    }

    fn sqlite(name: &str) -> InfraTable {
        InfraTable::Sqlite(SqliteTable {
            project: String::from("analytics"),
            name: name.to_string(),
            path: String::from("/var/lib/store.db"),
        })
    }

    fn state(resources: Vec<InfraTable>) -> InfraState {
        let mut state = InfraState::new("analytics");
        for resource in resources {
            state.add_resource(resource);
        }
        state
    }

    #[test]
    fn test_identical_states_are_all_unchanged() {
        let s = state(vec![
            dynamo("analytics", "orders_table", Some(3600)),
            sqlite("events_table"),
        ]);

        let report = DiffEngine::new().compute_diff(&s, &s).unwrap();

        assert_eq!(report.diffs.len(), 2);
        assert!(!report.has_changes());
        assert!(report
            .diffs
            .iter()
            .all(|d| d.transition == Transition::Unchanged && d.field_changes.is_empty()));
    }

    #[test]
    fn test_create_scenario() {
        let current = state(vec![]);
        let desired = state(vec![dynamo("analytics", "orders_table", Some(3600))]);

        let report = DiffEngine::new().compute_diff(&current, &desired).unwrap();

        assert_eq!(report.diffs.len(), 1);
        let diff = &report.diffs[0];
        assert_eq!(diff.name, "orders_table");
        assert_eq!(diff.transition, Transition::Create);
        assert!(diff.current.is_none());
        assert_eq!(diff.desired.as_ref().unwrap().name(), "orders_table");
    }

    #[test]
    fn test_delete_scenario_empties_a_kind() {
        let current = state(vec![sqlite("events_table"), sqlite("orders_table")]);
        let desired = state(vec![]);

        let report = DiffEngine::new().compute_diff(&current, &desired).unwrap();

        assert_eq!(report.deletes, 2);
        assert!(report.diffs.iter().all(|d| {
            d.transition == Transition::Delete && d.desired.is_none() && d.current.is_some()
        }));
    }

    #[test]
    fn test_update_suppresses_ignored_project_field() {
        let current = state(vec![dynamo("p1", "orders_table", Some(3600))]);
        let desired = state(vec![dynamo("p2", "orders_table", Some(7200))]);

        let report = DiffEngine::new().compute_diff(&current, &desired).unwrap();

        assert_eq!(report.updates, 1);
        let diff = &report.diffs[0];
        assert_eq!(diff.transition, Transition::Update);
        assert_eq!(diff.field_changes.len(), 1);
        assert_eq!(diff.field_changes[0].field_name, "ttl");
        assert_eq!(diff.field_changes[0].old_value, json!(3600));
        assert_eq!(diff.field_changes[0].new_value, json!(7200));
    }

    #[test]
    fn test_rename_is_delete_plus_create() {
        let current = state(vec![dynamo("analytics", "a", Some(3600))]);
        let desired = state(vec![dynamo("analytics", "b", Some(3600))]);

        let report = DiffEngine::new().compute_diff(&current, &desired).unwrap();

        assert_eq!(report.creates, 1);
        assert_eq!(report.deletes, 1);
        assert_eq!(report.updates, 0);
        let created = report.diffs.iter().find(|d| d.name == "b").unwrap();
        let deleted = report.diffs.iter().find(|d| d.name == "a").unwrap();
        assert_eq!(created.transition, Transition::Create);
        assert_eq!(deleted.transition, Transition::Delete);
    }

    #[test]
    fn test_kinds_are_reported_in_registry_order() {
        let current = state(vec![]);
        let desired = state(vec![
            sqlite("events_table"),
            dynamo("analytics", "orders_table", None),
        ]);

        let report = DiffEngine::new().compute_diff(&current, &desired).unwrap();

        // Dynamo comes before sqlite in the kind registry, regardless of
        // state file ordering.
        let kinds: Vec<ResourceKind> = report.diffs.iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![ResourceKind::DynamoTable, ResourceKind::SqliteTable]
        );
    }

    #[test]
    fn test_duplicate_names_abort_the_run() {
        let current = state(vec![
            dynamo("analytics", "orders_table", None),
            dynamo("analytics", "orders_table", None),
        ]);
        let desired = state(vec![]);

        assert!(DiffEngine::new().compute_diff(&current, &desired).is_err());
    }

    #[test]
    fn test_mixed_kinds_partition_independently() {
        let current = state(vec![
            dynamo("analytics", "orders_table", Some(3600)),
            sqlite("events_table"),
        ]);
        let desired = state(vec![
            dynamo("analytics", "orders_table", Some(7200)),
            sqlite("sessions_table"),
        ]);

        let report = DiffEngine::new().compute_diff(&current, &desired).unwrap();

        assert_eq!(report.updates, 1);
        assert_eq!(report.creates, 1);
        assert_eq!(report.deletes, 1);
        assert_eq!(report.diffs.len(), 3);
    }
}
