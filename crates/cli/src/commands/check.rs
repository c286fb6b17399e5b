//! The `check` command: read a check request, run the check engine against
//! GitHub, and write the resulting version list to stdout.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use tracing::{debug, info, instrument};

use pr_scout_core::config::CheckRequest;
use pr_scout_core::PrScout;
use pr_scout_platforms::github::{create_token_client, GitHubProvider};

use crate::errors::CliError;

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Read the check request JSON from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

/// Splits a `owner/name` repository string into its two parts.
fn parse_repository(repository: &str) -> Result<(String, String), CliError> {
    match repository.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() => {
            Ok((owner.to_string(), name.to_string()))
        }
        _ => Err(CliError::InvalidArguments(format!(
            "Repository must be in 'owner/name' form, got '{}'",
            repository
        ))),
    }
}

/// Reads the check request from the given file, or from stdin when no file
/// is named.
fn read_request(input: Option<&PathBuf>) -> Result<CheckRequest, CliError> {
    let payload = match input {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            CliError::InvalidArguments(format!("Failed to read {}: {}", path.display(), e))
        })?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| CliError::InvalidArguments(format!("Failed to read stdin: {}", e)))?;
            buffer
        }
    };

    serde_json::from_str(&payload)
        .map_err(|e| CliError::ConfigError(format!("Invalid check request: {}", e)))
}

/// Executes the check command.
///
/// The check request is parsed and validated, a GitHub provider is built
/// for the configured repository, and the engine's response is written to
/// stdout as a single line of JSON. Logs go to stderr so stdout stays
/// machine-readable.
///
/// # Arguments
///
/// * `args` - The parsed command arguments
///
/// # Returns
///
/// A `Result` indicating success or the error that stopped the check
#[instrument]
pub async fn execute(args: CheckArgs) -> Result<(), CliError> {
    let request = read_request(args.input.as_ref())?;

    let (owner, name) = parse_repository(&request.source.repository)?;

    if request.source.access_token.is_empty() {
        return Err(CliError::AuthError(
            "No access token provided in the source configuration".to_string(),
        ));
    }

    debug!(
        repository_owner = owner,
        repository = name,
        "Creating GitHub client"
    );

    let client = create_token_client(
        &request.source.access_token,
        request.source.endpoint.as_deref(),
    )
    .map_err(|e| CliError::AuthError(format!("Failed to create GitHub client: {}", e)))?;

    let provider = GitHubProvider::new(client, owner, name);
    let scout = PrScout::new(provider);

    let response = scout
        .check(&request)
        .await
        .map_err(|e| CliError::CheckFailed(e.to_string()))?;

    info!(
        repository = request.source.repository,
        versions = response.len(),
        "Check completed"
    );

    let body = serde_json::to_string(&response)
        .map_err(|e| CliError::Other(format!("Failed to encode response: {}", e)))?;
    println!("{}", body);

    Ok(())
}
