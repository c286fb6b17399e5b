//! # PR Scout CLI
//!
//! Command-line interface for detecting which pull requests a polling
//! pipeline should treat as new versions.
//!
//! This binary reads a check request (source configuration plus the prior
//! version) as JSON from stdin or a file, runs the check engine against
//! GitHub, and writes the resulting version list as JSON to stdout. Logs go
//! to stderr so stdout stays machine-readable.
//!
//! # Commands
//!
//! - `check` - Compute the pull request versions newer than the watermark
//!
//! # Examples
//!
//! ```bash
//! # Check for new versions, reading the request from stdin
//! echo '{"source": {"repository": "owner/repo", "access_token": "..."}}' | pr-scout check
//!
//! # Or from a file
//! pr-scout check --input request.json
//! ```

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

use clap::{Parser, Subcommand};
use tracing::{error, info, instrument};

/// Command implementations for the CLI.
mod commands;

/// Error types specific to the CLI.
mod errors;

use commands::check::CheckArgs;
use errors::CliError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Command-line interface structure for pr_scout.
///
/// This struct defines the top-level CLI interface using clap's derive API.
/// It includes global options like verbose logging and the main command
/// structure.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

/// Available commands for the pr_scout CLI.
#[derive(Subcommand)]
enum Commands {
    /// Compute the pull request versions newer than the watermark
    Check(CheckArgs),
}

/// Main entry point for the pr_scout CLI.
///
/// This function initializes logging, parses command-line arguments, and
/// dispatches to the appropriate command handler.
///
/// # Returns
///
/// Returns `Ok(())` on successful execution, or a `CliError` if any
/// operation fails. The error variant determines the process exit code.
#[tokio::main]
#[instrument]
async fn main() -> Result<(), CliError> {
    // Logs go to stderr; stdout carries the response JSON.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_env("PR_SCOUT_LOG"))
        .init();

    // Parse command line arguments
    let cli = Cli::parse();

    // Set verbose logging if requested
    if cli.verbose {
        info!("Verbose mode enabled");
    }

    // Execute the appropriate command
    match cli.command {
        Commands::Check(args) => match commands::check::execute(args).await {
            Ok(result) => Ok(result),
            Err(e) => {
                error!("Error checking for new versions: {}", e);
                Err(e)
            }
        },
    }
}
