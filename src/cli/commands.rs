//! CLI command definitions.
//!
//! This module defines all CLI commands and their arguments using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Infradiff - structural diff for declarative infrastructure state.
#[derive(Parser, Debug)]
#[command(name = "infradiff")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute and display the diff between two state files.
    Plan {
        /// Path to the current state file.
        #[arg(long, env = "INFRADIFF_CURRENT")]
        current: PathBuf,

        /// Path to the desired state file.
        #[arg(long, env = "INFRADIFF_DESIRED")]
        desired: PathBuf,

        /// Show field-level change details.
        #[arg(short, long)]
        detailed: bool,
    },

    /// Validate a state file (format, version, unique names).
    Validate {
        /// Path to the state file.
        file: PathBuf,
    },

    /// Print the fingerprint of a state file.
    Fingerprint {
        /// Path to the state file.
        file: PathBuf,
    },
}

/// Output format options.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// Machine-readable JSON output.
    Json,
}
