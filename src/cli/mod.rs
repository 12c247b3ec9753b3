//! Command-line interface for infradiff.
//!
//! This module defines the CLI surface: command parsing and output
//! rendering.

mod commands;
mod output;

pub use commands::{Cli, Commands, OutputFormat};
pub use output::OutputFormatter;
