//! Diff computation for current vs desired infrastructure state.
//!
//! This module contains the reconciliation core: name-identity set
//! partitioning, ignore-aware field comparison, and the aggregator that
//! turns two states into one ordered diff report.

mod engine;
mod field;
mod reconcile;
mod report;

pub use engine::DiffEngine;
pub use field::{diff_between, IGNORED_FIELDS};
pub use reconcile::{reconcile, Named, Partition};
pub use report::{DiffReport, FieldChange, ResourceDiff, Transition};
