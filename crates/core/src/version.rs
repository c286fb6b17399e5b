//! # Versions
//!
//! This module contains the watermark record the check emits and the total
//! order over it.
//!
//! The same structure is both input and output: the prior watermark comes in
//! on the check request, and the qualifying pull requests go out as new
//! watermarks. An empty pull request id denotes "no prior version seen".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pr_scout_platforms::models::PullRequest;

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;

/// A single pull request version: the watermark the pipeline acts upon.
///
/// # Examples
///
/// ```
/// use pr_scout_core::version::Version;
///
/// let prior = Version::default();
/// assert!(prior.pr.is_empty(), "the default version means no prior version");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    /// The pull request number, in decimal string form; empty when no prior
    /// version exists
    pub pr: String,

    /// The SHA of the pull request's tip commit
    pub commit: String,

    /// The timestamp that orders this version against others
    pub committed: DateTime<Utc>,
}

impl Version {
    /// Builds the version record for a qualifying pull request.
    pub fn from_pull_request(pr: &PullRequest) -> Self {
        Self {
            pr: pr.number.to_string(),
            commit: pr.tip.sha.clone(),
            committed: pr.updated_date(),
        }
    }
}

impl Default for Version {
    fn default() -> Self {
        Self {
            pr: String::new(),
            commit: String::new(),
            committed: DateTime::UNIX_EPOCH,
        }
    }
}

/// Sorts versions ascending by commit timestamp, oldest first, so the latest
/// version is always the last element.
///
/// The sort is stable: versions with equal timestamps keep the relative
/// order the filtering pass produced.
pub fn sort_versions(versions: &mut [Version]) {
    versions.sort_by_key(|v| v.committed);
}
