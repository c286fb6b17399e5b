//! # PR Scout Core
//!
//! Core decision logic for detecting which pull requests a polling
//! continuous-delivery pipeline should treat as new versions.
//!
//! Given the current set of pull requests, a previously observed version,
//! and a chain of inclusion/exclusion filters, pr_scout computes the ordered
//! list of pull requests newer than the watermark:
//! - Cheap filters run first: skip markers, base branch, recency, labels,
//!   fork origin, draft status, and approved-review count
//! - The wanted-files filter runs last, because it may fetch further pages
//!   of changed files from the platform
//! - Survivors are sorted ascending by commit timestamp, so the latest
//!   version is always the last element
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pr_scout_platforms::PullRequestProvider;
//! use pr_scout_core::{PrScout, config::CheckRequest};
//! use anyhow::Result;
//!
//! async fn check_for_versions<P: PullRequestProvider + std::fmt::Debug>(
//!     provider: P,
//!     request: &CheckRequest,
//! ) -> Result<()> {
//!     let scout = PrScout::new(provider);
//!
//!     // Compute the versions newer than the request's watermark
//!     let versions = scout.check(request).await?;
//!
//!     for version in &versions {
//!         println!("pull request {} at {}", version.pr, version.committed);
//!     }
//!
//!     Ok(())
//! }
//! ```

use tracing::{debug, info, instrument};

pub mod checks;
pub mod config;
pub mod errors;
pub mod files;
pub mod version;

use config::{CheckRequest, CheckResponse};
use errors::CheckError;
use pr_scout_platforms::models::{PullRequest, PullRequestState};
use pr_scout_platforms::PullRequestProvider;
use version::Version;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Main struct for detecting new pull request versions.
///
/// `PrScout` wraps a platform provider and answers one question: given a
/// source configuration and a prior version, which pull requests are new and
/// wanted?
///
/// # Examples
///
/// ```rust,no_run
/// use pr_scout_platforms::PullRequestProvider;
/// use pr_scout_core::{PrScout, config::CheckRequest};
/// use anyhow::Result;
///
/// async fn example<P: PullRequestProvider + std::fmt::Debug>(
///     provider: P,
///     request: &CheckRequest,
/// ) -> Result<()> {
///     let scout = PrScout::new(provider);
///
///     let versions = scout.check(request).await?;
///
///     println!("New versions: {:?}", versions);
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct PrScout<P: PullRequestProvider + std::fmt::Debug> {
    provider: P,
}

impl<P: PullRequestProvider + std::fmt::Debug> PrScout<P> {
    /// Creates a new `PrScout` using the given platform provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Determines whether a candidate passes every filter that needs no
    /// further platform calls.
    ///
    /// The evaluation order is part of the contract: these filters run
    /// before the wanted-files check so that a candidate rejected here
    /// never triggers file-page retrieval.
    fn passes_metadata_filters(&self, request: &CheckRequest, pr: &PullRequest) -> bool {
        let source = &request.source;

        // [ci skip]/[skip ci] in the title or in the tip commit message
        if !source.disable_ci_skip
            && (checks::skip_ci::contains_skip_marker(&pr.title)
                || checks::skip_ci::contains_skip_marker(&pr.tip.message))
        {
            debug!(pull_request = pr.number, "Skip marker found, ignoring");
            return false;
        }

        // Base branch, when constrained
        if !source.base_branch.is_empty() && pr.base_branch != source.base_branch {
            return false;
        }

        // Candidates that are not strictly newer than the watermark
        if pr.updated_date() <= request.version.committed {
            return false;
        }

        // At least one of the desired labels, when constrained
        if !source.labels.is_empty() {
            let label_found = source
                .labels
                .iter()
                .any(|wanted| pr.labels.iter().any(|label| label.name == *wanted));

            if !label_found {
                return false;
            }
        }

        // Forks
        if source.disable_forks && pr.is_cross_repository {
            return false;
        }

        // Drafts
        if source.ignore_drafts && pr.is_draft {
            return false;
        }

        // Required number of approved reviews
        if pr.approved_review_count < source.required_review_approvals {
            return false;
        }

        true
    }

    /// Computes the ordered list of pull request versions newer than the
    /// request's watermark.
    ///
    /// Candidates are listed for the configured review states (open only
    /// when unconfigured), filtered, sorted ascending by commit timestamp,
    /// and collapsed per the watermark rules:
    /// - no survivors but a prior version: the prior version is echoed back
    /// - survivors but no prior version: only the latest survivor is
    ///   emitted, so a first run does not flood the pipeline with
    ///   historical pull requests
    /// - otherwise: all survivors, sorted
    ///
    /// # Arguments
    ///
    /// * `request` - The source configuration and the prior version
    ///
    /// # Returns
    ///
    /// A `Result` containing the new versions, or a [`CheckError`] when the
    /// platform cannot be read or a path pattern is malformed. No partial
    /// result is ever produced.
    #[instrument(skip(self, request), fields(repository = %request.source.repository))]
    pub async fn check(&self, request: &CheckRequest) -> Result<CheckResponse, CheckError> {
        let source = &request.source;

        let default_states = [PullRequestState::Open];
        let filter_states: &[PullRequestState] = if source.states.is_empty() {
            &default_states
        } else {
            &source.states
        };

        let pulls = self
            .provider
            .list_pull_requests(filter_states)
            .await
            .map_err(CheckError::ListPullRequests)?;

        debug!(count = pulls.len(), "Listed candidate pull requests");

        let mut versions = Vec::new();
        for pr in &pulls {
            if !self.passes_metadata_filters(request, pr) {
                continue;
            }

            // The wanted-files check runs last: it is the only filter that
            // may call back into the platform.
            if !source.paths.is_empty() || !source.ignore_paths.is_empty() {
                let found = files::has_wanted_files(
                    &self.provider,
                    &pr.number.to_string(),
                    &source.paths,
                    &source.ignore_paths,
                    pr.files.clone(),
                    pr.has_more_files,
                    pr.files_cursor.clone(),
                )
                .await?;

                if !found {
                    debug!(pull_request = pr.number, "No wanted files, ignoring");
                    continue;
                }
            }

            versions.push(Version::from_pull_request(pr));
        }

        version::sort_versions(&mut versions);

        info!(
            candidates = pulls.len(),
            survivors = versions.len(),
            "Filtered candidate pull requests",
        );

        let response = match (versions.is_empty(), request.version.pr.is_empty()) {
            // No new versions but a prior one: the prior version is still
            // current.
            (true, false) => vec![request.version.clone()],
            // New versions and no prior one: emit only the latest.
            (false, true) => versions.split_off(versions.len() - 1),
            // Everything else: the full sorted list (possibly empty).
            _ => versions,
        };

        Ok(response)
    }
}
