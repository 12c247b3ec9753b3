//! State module for the infradiff engine.
//!
//! This module handles everything about infrastructure state:
//! - The typed table records and the closed kind registry
//! - Loading state from YAML/JSON files
//! - Computing state fingerprints for change detection

mod fingerprint;
mod loader;
mod types;

pub use fingerprint::StateFingerprint;
pub use loader::StateLoader;
pub use types::{
    DatastoreTable, DynamoTable, InfraState, InfraTable, ResourceKind, SqliteTable, STATE_VERSION,
};
