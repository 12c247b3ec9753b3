//! State types for declarative infrastructure tables.
//!
//! These types describe the provisioned backing tables of a data platform.
//! A state file holds one [`InfraState`]; the diff engine compares two of
//! them (current vs desired) to decide what must change.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashSet;

use crate::error::{DiffError, Result};

/// Current version of the state format.
pub const STATE_VERSION: &str = "1.0";

/// The closed set of resource kinds the engine knows how to reconcile.
///
/// Adding a kind means adding a variant here, a record type below, and an
/// entry in [`ResourceKind::ALL`]; the reconciler and field differ need no
/// changes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// Google Datastore backing table.
    DatastoreTable,
    /// DynamoDB backing table.
    DynamoTable,
    /// Local SQLite backing table.
    SqliteTable,
}

impl ResourceKind {
    /// All known kinds, in report ordering.
    pub const ALL: [Self; 3] = [Self::DatastoreTable, Self::DynamoTable, Self::SqliteTable];

    /// Human-readable label for this kind.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DatastoreTable => "datastore table",
            Self::DynamoTable => "dynamodb table",
            Self::SqliteTable => "sqlite table",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A Google Datastore backing table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatastoreTable {
    /// Owning project (bookkeeping tag, ignored by the differ).
    pub project: String,
    /// Table name, unique within the kind.
    pub name: String,
    /// GCP project ID hosting the table.
    #[serde(default)]
    pub project_id: Option<String>,
    /// Datastore namespace.
    #[serde(default)]
    pub namespace: Option<String>,
    /// Datastore database ID.
    #[serde(default)]
    pub database: Option<String>,
}

/// A DynamoDB backing table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DynamoTable {
    /// Owning project (bookkeeping tag, ignored by the differ).
    pub project: String,
    /// Table name, unique within the kind.
    pub name: String,
    /// AWS region hosting the table.
    pub region: String,
    /// Row time-to-live in seconds, if enabled.
    #[serde(default)]
    pub ttl: Option<u64>,
}

/// A local SQLite backing table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SqliteTable {
    /// Owning project (bookkeeping tag, ignored by the differ).
    pub project: String,
    /// Table name, unique within the kind.
    pub name: String,
    /// Path to the database file.
    pub path: String,
}

/// One typed infrastructure table.
///
/// The closed enum is the decoder seam: the tag in the state file selects
/// the variant, and every variant exposes the same `name`/`kind`/`fields`
/// surface the diff engine works against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind")]
pub enum InfraTable {
    /// Google Datastore backing table.
    #[serde(rename = "datastore_table")]
    Datastore(DatastoreTable),
    /// DynamoDB backing table.
    #[serde(rename = "dynamo_table")]
    Dynamo(DynamoTable),
    /// Local SQLite backing table.
    #[serde(rename = "sqlite_table")]
    Sqlite(SqliteTable),
}

impl InfraTable {
    /// Returns the kind of this table.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        match self {
            Self::Datastore(_) => ResourceKind::DatastoreTable,
            Self::Dynamo(_) => ResourceKind::DynamoTable,
            Self::Sqlite(_) => ResourceKind::SqliteTable,
        }
    }

    /// Returns the table name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Datastore(t) => &t.name,
            Self::Dynamo(t) => &t.name,
            Self::Sqlite(t) => &t.name,
        }
    }

    /// Returns the fixed field schema as ordered `(name, value)` pairs.
    ///
    /// Two tables of the same kind always yield the same field names in
    /// the same order; the field differ relies on this.
    #[must_use]
    pub fn fields(&self) -> Vec<(&'static str, Value)> {
        match self {
            Self::Datastore(t) => t.field_values(),
            Self::Dynamo(t) => t.field_values(),
            Self::Sqlite(t) => t.field_values(),
        }
    }
}

impl std::fmt::Display for InfraTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}'", self.kind(), self.name())
    }
}

impl DatastoreTable {
    fn field_values(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("project", json!(self.project)),
            ("name", json!(self.name)),
            ("project_id", json!(self.project_id)),
            ("namespace", json!(self.namespace)),
            ("database", json!(self.database)),
        ]
    }
}

impl DynamoTable {
    fn field_values(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("project", json!(self.project)),
            ("name", json!(self.name)),
            ("region", json!(self.region)),
            ("ttl", json!(self.ttl)),
        ]
    }
}

impl SqliteTable {
    fn field_values(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("project", json!(self.project)),
            ("name", json!(self.name)),
            ("path", json!(self.path)),
        ]
    }
}

/// The complete infrastructure state of one project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InfraState {
    /// State format version.
    pub version: String,
    /// Project name.
    pub project: String,
    /// All provisioned tables, across every kind.
    #[serde(default)]
    pub resources: Vec<InfraTable>,
}

impl InfraState {
    /// Creates a new empty state.
    #[must_use]
    pub fn new(project: &str) -> Self {
        Self {
            version: STATE_VERSION.to_string(),
            project: project.to_string(),
            resources: Vec::new(),
        }
    }

    /// Adds a table to the state.
    pub fn add_resource(&mut self, table: InfraTable) {
        self.resources.push(table);
    }

    /// Returns the tables of one kind, in state order.
    ///
    /// This is the decode step the diff engine runs per category.
    #[must_use]
    pub fn resources_of(&self, kind: ResourceKind) -> Vec<InfraTable> {
        self.resources
            .iter()
            .filter(|r| r.kind() == kind)
            .cloned()
            .collect()
    }

    /// Returns the total number of tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Returns true if the state holds no tables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Checks that table names are unique within each kind.
    ///
    /// # Errors
    ///
    /// Returns a [`DiffError::DuplicateName`] for the first duplicate found.
    pub fn validate(&self) -> Result<()> {
        for kind in ResourceKind::ALL {
            let mut seen = HashSet::new();
            for resource in self.resources.iter().filter(|r| r.kind() == kind) {
                if !seen.insert(resource.name()) {
                    return Err(DiffError::duplicate(
                        format!("{} resources", kind),
                        resource.name(),
                    )
                    .into());
                }
            }
        }
        Ok(())
    }
}
