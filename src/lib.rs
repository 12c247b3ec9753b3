// ============================================================================
// Strict linting - Dangerous or non-idiomatic practices are forbidden
// ============================================================================

#![deny(warnings)]                    // All warnings are treated as errors
#![deny(unsafe_code)]                 // Unsafe code is forbidden
#![deny(missing_docs)]                // All public items must be documented
#![deny(dead_code)]                   // Unused code is forbidden
#![deny(non_camel_case_types)]        // Types must follow CamelCase convention

// Additional strictness - Leave nothing unchecked
#![deny(unused_imports)]              // Unused imports are forbidden
#![deny(unused_variables)]            // Unused variables are forbidden
#![deny(unused_must_use)]             // Must handle Result and Option explicitly
#![deny(non_snake_case)]              // Variables and functions must be snake_case
#![deny(non_upper_case_globals)]      // Constants must be UPPER_CASE
#![deny(nonstandard_style)]           // Non-standard code style is forbidden
#![forbid(unsafe_op_in_unsafe_fn)]    // Unsafe ops in unsafe fns are forbidden

// Clippy lints (warnings only)
#![warn(clippy::all)]                 // All standard Clippy lints
#![warn(clippy::pedantic)]            // Very strict Clippy lints
#![warn(clippy::nursery)]             // Experimental lints
#![warn(clippy::unwrap_used)]         // unwrap() warning
#![warn(clippy::expect_used)]         // expect() warning
#![warn(clippy::panic)]               // panic!() warning
#![warn(clippy::print_stdout)]        // println!() warning
#![warn(clippy::todo)]                // TODO warning
#![warn(clippy::unimplemented)]       // unimplemented!() warning
#![warn(clippy::missing_const_for_fn)] // Force const when possible
#![warn(clippy::unwrap_in_result)]    // unwrap() in Result warning
#![warn(clippy::module_inception)]    // Module with same name as crate warning
#![warn(clippy::redundant_clone)]     // Useless clones warning
#![warn(clippy::shadow_unrelated)]    // Shadowing unrelated variables warning
#![warn(clippy::too_many_arguments)]  // Limit function arguments
#![warn(clippy::cognitive_complexity)] // Limit cognitive complexity

// Safety and robustness lints
#![deny(overflowing_literals)]        // Overflowing literals are forbidden
#![deny(arithmetic_overflow)]         // Arithmetic overflow is forbidden

// ============================================================================
// Crate Documentation
// ============================================================================

//! # Infradiff
//!
//! A structural diff and plan engine for declarative data-platform
//! infrastructure tables.
//!
//! ## Overview
//!
//! Infradiff compares a *current* and a *desired* infrastructure state and
//! classifies every resource as created, deleted, updated, or unchanged,
//! down to the individual field:
//!
//! - Describe provisioned backing tables in a YAML or JSON state file
//! - Compute an ordered, deterministic diff report across all table kinds
//! - Drive a plan/apply workflow from the classified change list
//!
//! ## Architecture
//!
//! The engine is a pure, synchronous computation in three layers:
//!
//! 1. **Decode**: state files become typed table records per kind
//! 2. **Reconcile**: name identity partitions each kind into add/delete/keep
//! 3. **Diff**: kept resources are compared field by field, with
//!    bookkeeping fields ignored
//!
//! Renames are modeled as delete + add; the engine never guesses identity
//! beyond the name.
//!
//! ## Modules
//!
//! - [`state`]: state types, file loading, and fingerprinting
//! - [`differ`]: set reconciliation, field diffing, and report assembly
//! - [`cli`]: command-line interface
//! - [`error`]: error types
//!
//! ## Example
//!
//! ```yaml
//! version: "1.0"
//! project: analytics
//! resources:
//!   - kind: dynamo_table
//!     project: analytics
//!     name: orders_table
//!     region: us-east
//!     ttl: 3600
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod cli;
pub mod differ;
pub mod error;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

pub use cli::{Cli, Commands, OutputFormat, OutputFormatter};
pub use differ::{DiffEngine, DiffReport, FieldChange, ResourceDiff, Transition};
pub use error::{InfraDiffError, Result};
pub use state::{InfraState, InfraTable, ResourceKind, StateFingerprint, StateLoader};
