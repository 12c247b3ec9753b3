//! Infradiff CLI entrypoint.
//!
//! This is the main entrypoint for the infradiff command-line tool.

use std::process::ExitCode;

use infradiff::cli::{Cli, Commands, OutputFormatter};
use infradiff::differ::DiffEngine;
use infradiff::error::Result;
use infradiff::state::{StateFingerprint, StateLoader};

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Main entrypoint.
fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Initializes the logging system.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs the selected command.
fn run(cli: Cli) -> Result<()> {
    let formatter = OutputFormatter::new(cli.output);
    let loader = StateLoader::new();

    match cli.command {
        Commands::Plan {
            current,
            desired,
            detailed,
        } => {
            let current_state = loader.load_file(&current)?;
            let desired_state = loader.load_file(&desired)?;
            debug!(
                "Comparing {} current against {} desired resources",
                current_state.len(),
                desired_state.len()
            );

            let report = DiffEngine::new().compute_diff(&current_state, &desired_state)?;
            println!("{}", formatter.format_report(&report, detailed));
        }

        Commands::Validate { file } => {
            let state = loader.load_file(&file)?;
            state.validate()?;
            println!("{}", formatter.format_state(&state));
        }

        Commands::Fingerprint { file } => {
            let state = loader.load_file(&file)?;
            let hasher = StateFingerprint::new();
            println!("{}", hasher.fingerprint(&state));
        }
    }

    Ok(())
}
