//! State fingerprinting for change detection.
//!
//! This module provides deterministic hashing of state structures so two
//! states can be compared cheaply before running a full diff, and so plan
//! output can identify the states it was computed from.

use sha2::{Digest, Sha256};

use super::types::InfraState;

/// Hasher for computing state fingerprints.
#[derive(Debug, Default)]
pub struct StateFingerprint;

impl StateFingerprint {
    /// Creates a new fingerprint hasher.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Computes a fingerprint of the entire state.
    ///
    /// The fingerprint changes when any table or field value changes.
    #[must_use]
    pub fn fingerprint(&self, state: &InfraState) -> String {
        let mut hasher = Sha256::new();

        hasher.update(state.version.as_bytes());
        hasher.update(state.project.as_bytes());

        for resource in &state.resources {
            hasher.update(resource.kind().label().as_bytes());
            hasher.update(resource.name().as_bytes());
            for (field, value) in resource.fields() {
                hasher.update(field.as_bytes());
                hasher.update(value.to_string().as_bytes());
            }
        }

        hex::encode(hasher.finalize())
    }

    /// Computes a short fingerprint (first 8 characters) for display.
    #[must_use]
    pub fn short_hash(&self, hash: &str) -> String {
        hash.chars().take(8).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::{DynamoTable, InfraState, InfraTable};

    fn sample_state(ttl: Option<u64>) -> InfraState {
        let mut state = InfraState::new("analytics");
        state.add_resource(InfraTable::Dynamo(DynamoTable {
            project: String::from("analytics"),
            name: String::from("orders_table"),
            region: String::from("us-east"),
            ttl,
        }));
        state
    }

    #[test]
    fn test_fingerprint_deterministic() {
        let hasher = StateFingerprint::new();
        let state = sample_state(Some(3600));

        assert_eq!(hasher.fingerprint(&state), hasher.fingerprint(&state));
    }

    #[test]
    fn test_field_change_changes_fingerprint() {
        let hasher = StateFingerprint::new();

        let before = hasher.fingerprint(&sample_state(Some(3600)));
        let after = hasher.fingerprint(&sample_state(Some(7200)));

        assert_ne!(before, after);
    }

    #[test]
    fn test_short_hash() {
        let hasher = StateFingerprint::new();
        let short = hasher.short_hash("abcdef1234567890");

        assert_eq!(short, "abcdef12");
    }
}
