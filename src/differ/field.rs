//! Field-level comparison of kept resources.
//!
//! A resource present on both sides of a reconciliation is compared field
//! by field here. Fields in the ignore-list never trigger or appear in an
//! update, so a pair differing only there still classifies as unchanged.

use tracing::debug;

use crate::state::InfraTable;

use super::report::{FieldChange, ResourceDiff, Transition};

/// Field names excluded from comparison.
///
/// The `project` tag is carried on every record for bookkeeping but is not
/// part of a table's effective configuration.
pub const IGNORED_FIELDS: &[&str] = &["project"];

/// Computes the diff between the current and desired version of one
/// resource.
///
/// Both records are always populated in the result; this is the "keep"
/// case only.
///
/// # Panics
///
/// Panics if the two resources are of different kinds. That is a caller
/// bug, not a recoverable condition: the aggregator only pairs resources
/// within one kind.
#[must_use]
pub fn diff_between(current: &InfraTable, desired: &InfraTable) -> ResourceDiff {
    assert_eq!(
        current.kind(),
        desired.kind(),
        "cannot diff resources of different kinds: {} vs {}",
        current.kind(),
        desired.kind()
    );

    let mut field_changes = Vec::new();
    let mut transition = Transition::Unchanged;

    // Fast path: fully equal records need no per-field walk. The per-field
    // result below is authoritative when only ignored fields differ.
    if current != desired {
        for ((field, old_value), (_, new_value)) in
            current.fields().into_iter().zip(desired.fields())
        {
            if IGNORED_FIELDS.contains(&field) {
                continue;
            }
            if old_value != new_value {
                transition = Transition::Update;
                field_changes.push(FieldChange {
                    field_name: field.to_string(),
                    old_value,
                    new_value,
                });
            }
        }
    }

    if transition == Transition::Update {
        debug!(
            "{} '{}' needs update ({} fields)",
            desired.kind(),
            desired.name(),
            field_changes.len()
        );
    }

    ResourceDiff {
        name: desired.name().to_string(),
        kind: desired.kind(),
        current: Some(current.clone()),
        desired: Some(desired.clone()),
        field_changes,
        transition,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{DynamoTable, SqliteTable};
    use serde_json::json;

    fn dynamo(project: &str, ttl: Option<u64>) -> InfraTable {
        InfraTable::Dynamo(DynamoTable {
            project: project.to_string(),
            name: String::from("orders_table"),
            region: String::from("us-east"),
            ttl,
        })
    }

    #[test]
    fn test_equal_resources_are_unchanged() {
        let table = dynamo("p1", Some(3600));

        let diff = diff_between(&table, &table.clone());

        assert_eq!(diff.transition, Transition::Unchanged);
        assert!(diff.field_changes.is_empty());
        assert!(diff.current.is_some());
        assert!(diff.desired.is_some());
    }

    #[test]
    fn test_ignored_field_change_stays_unchanged() {
        let current = dynamo("p1", Some(3600));
        let desired = dynamo("p2", Some(3600));

        let diff = diff_between(&current, &desired);

        // Raw equality is false, but the only difference is ignored.
        assert_ne!(current, desired);
        assert_eq!(diff.transition, Transition::Unchanged);
        assert!(diff.field_changes.is_empty());
    }

    #[test]
    fn test_effective_change_is_an_update() {
        let current = dynamo("p1", Some(3600));
        let desired = dynamo("p2", Some(7200));

        let diff = diff_between(&current, &desired);

        assert_eq!(diff.transition, Transition::Update);
        assert_eq!(diff.field_changes.len(), 1);
        assert_eq!(diff.field_changes[0].field_name, "ttl");
        assert_eq!(diff.field_changes[0].old_value, json!(3600));
        assert_eq!(diff.field_changes[0].new_value, json!(7200));
    }

    #[test]
    fn test_multiple_field_changes() {
        let current = InfraTable::Dynamo(DynamoTable {
            project: String::from("analytics"),
            name: String::from("orders_table"),
            region: String::from("us-east"),
            ttl: Some(3600),
        });
        let desired = InfraTable::Dynamo(DynamoTable {
            project: String::from("analytics"),
            name: String::from("orders_table"),
            region: String::from("eu-west"),
            ttl: None,
        });

        let diff = diff_between(&current, &desired);

        assert_eq!(diff.transition, Transition::Update);
        let fields: Vec<&str> = diff
            .field_changes
            .iter()
            .map(|c| c.field_name.as_str())
            .collect();
        assert_eq!(fields, vec!["region", "ttl"]);
    }

    #[test]
    #[should_panic(expected = "different kinds")]
    fn test_kind_mismatch_panics() {
        let current = dynamo("p1", None);
        let desired = InfraTable::Sqlite(SqliteTable {
            project: String::from("p1"),
            name: String::from("orders_table"),
            path: String::from("/tmp/store.db"),
        });

        let _ = diff_between(&current, &desired);
    }
}
