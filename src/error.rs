//! Error types for the infradiff engine.
//!
//! This module provides the error hierarchy for all operations in the
//! plan lifecycle: state loading, decoding, and diff computation.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for infradiff operations.
#[derive(Debug, Error)]
pub enum InfraDiffError {
    /// State loading and decoding errors.
    #[error("State error: {0}")]
    State(#[from] StateError),

    /// Diff computation errors.
    #[error("Diff error: {0}")]
    Diff(#[from] DiffError),

    /// IO errors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// State loading and decoding errors.
#[derive(Debug, Error)]
pub enum StateError {
    /// The state file was not found.
    #[error("State file not found: {path}")]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// The state file could not be parsed.
    #[error("Failed to parse state: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
        /// Optional source location.
        location: Option<String>,
    },

    /// Serialization failed.
    #[error("State serialization error: {message}")]
    SerializationError {
        /// Description of the serialization error.
        message: String,
    },

    /// State version mismatch.
    #[error("State version mismatch: expected {expected}, found {found}")]
    VersionMismatch {
        /// Expected state version.
        expected: String,
        /// Found state version.
        found: String,
    },
}

/// Diff computation errors.
#[derive(Debug, Error)]
pub enum DiffError {
    /// A resource name appears more than once within one collection.
    ///
    /// Name identity is what pairs current and desired resources, so a
    /// duplicate makes the pairing ambiguous. The run is aborted instead
    /// of silently picking an arbitrary match.
    #[error("Duplicate resource name '{name}' in {scope}")]
    DuplicateName {
        /// Where the duplicate was found (e.g. "current state").
        scope: String,
        /// The duplicated name.
        name: String,
    },
}

/// Result type alias for infradiff operations.
pub type Result<T> = std::result::Result<T, InfraDiffError>;

impl InfraDiffError {
    /// Creates a new internal error with the given message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl StateError {
    /// Creates a parse error with a source location.
    #[must_use]
    pub fn parse(message: impl Into<String>, location: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
            location: Some(location.into()),
        }
    }

    /// Creates a serialization error with the given message.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }
}

impl DiffError {
    /// Creates a duplicate-name error.
    #[must_use]
    pub fn duplicate(scope: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateName {
            scope: scope.into(),
            name: name.into(),
        }
    }
}
