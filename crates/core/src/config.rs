//! Configuration settings for the pr_scout core functionality.
//!
//! This module centralizes the constants, the pre-compiled skip-marker
//! pattern, and the check request structures used throughout the crate.
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::version::Version;
use pr_scout_platforms::models::PullRequestState;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Number of changed files requested per page when paginating a pull
/// request's file list. The platform caps pages at 100 entries.
pub const CHANGED_FILES_PAGE_SIZE: u32 = 100;

lazy_static! {
    /// Pre-compiled pattern for the [ci skip]/[skip ci] marker
    pub static ref SKIP_CI_REGEX: Regex = Regex::new(r"(?i)\[(ci skip|skip ci)\]")
        .expect("Failed to compile skip marker regex");
}

/// The source configuration of a check: which repository to poll and which
/// pull requests qualify as versions.
///
/// Every filter field defaults to "unconstrained", so a minimal source only
/// names the repository and the access token.
///
/// # Examples
///
/// ```
/// use pr_scout_core::config::Source;
///
/// let source: Source = serde_json::from_str(
///     r#"{"repository": "itsdalmo/test-repository", "access_token": "oauthtoken"}"#,
/// ).unwrap();
/// assert!(source.states.is_empty());
/// assert_eq!(source.required_review_approvals, 0);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Source {
    /// The repository to poll, in `owner/name` form
    pub repository: String,

    /// Personal access token used to authenticate against the platform
    #[serde(default)]
    pub access_token: String,

    /// Alternate API endpoint, for enterprise installs
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Review states to include; empty means open pull requests only
    #[serde(default)]
    pub states: Vec<PullRequestState>,

    /// When set, `[ci skip]`/`[skip ci]` markers are not honored
    #[serde(default)]
    pub disable_ci_skip: bool,

    /// Only include pull requests targeting this branch; empty means any
    #[serde(default)]
    pub base_branch: String,

    /// Only include pull requests carrying at least one of these labels;
    /// empty means any
    #[serde(default)]
    pub labels: Vec<String>,

    /// When set, pull requests from forks are excluded
    #[serde(default)]
    pub disable_forks: bool,

    /// When set, draft pull requests are excluded
    #[serde(default)]
    pub ignore_drafts: bool,

    /// Minimum number of approved reviews a pull request must have
    #[serde(default)]
    pub required_review_approvals: u32,

    /// Only include pull requests touching files under these patterns;
    /// empty means any
    #[serde(default)]
    pub paths: Vec<String>,

    /// Exclude pull requests whose files all fall under these patterns
    #[serde(default)]
    pub ignore_paths: Vec<String>,
}

/// The input of a check invocation: the source configuration plus the prior
/// watermark. A missing version denotes "no prior version seen".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckRequest {
    /// The source configuration
    pub source: Source,

    /// The previously observed version
    #[serde(default)]
    pub version: Version,
}

/// The output of a check invocation: versions ordered ascending by commit
/// timestamp, so the latest is always the last element.
pub type CheckResponse = Vec<Version>;
