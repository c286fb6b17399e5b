//! # Models
//!
//! This module contains the data models used throughout the pr_scout core.
//!
//! These models represent the entities pr_scout works with: pull requests,
//! their changed files, and labels. They are designed to be serializable and
//! deserializable to facilitate integration with hosting platform APIs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// The review state of a pull request on the hosting platform.
///
/// This is a closed set of tagged variants rather than free-form strings so
/// that state filters compare with explicit equality and a misspelled state
/// is a deserialization error instead of a filter that silently matches
/// nothing. The wire values are the platform's own enumeration names.
///
/// # Examples
///
/// ```
/// use pr_scout_platforms::models::PullRequestState;
///
/// let state: PullRequestState = serde_json::from_str("\"MERGED\"").unwrap();
/// assert_eq!(state, PullRequestState::Merged);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PullRequestState {
    /// The pull request is open
    Open,

    /// The pull request was closed without merging
    Closed,

    /// The pull request was merged
    Merged,
}

/// Represents a label on a pull request.
///
/// # Examples
///
/// ```
/// use pr_scout_platforms::models::Label;
///
/// let label = Label {
///     name: "enhancement".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// The name of the label
    pub name: String,
}

/// A single file touched by a pull request.
///
/// Immutable value; its identity is the path string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedFile {
    /// The repository-relative path of the file
    pub path: String,
}

/// One page of a pull request's changed-file list.
///
/// Pages are retrieved on demand through
/// [`PullRequestProvider::get_changed_files`](crate::PullRequestProvider::get_changed_files);
/// the cursor is an opaque continuation token that callers pass back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedFilePage {
    /// The files on this page
    pub files: Vec<ChangedFile>,

    /// Whether further pages of files exist
    pub has_next_page: bool,

    /// Continuation token identifying where the next page begins
    pub end_cursor: Option<String>,
}

/// The last commit on a pull request's head branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitSummary {
    /// The commit SHA
    pub sha: String,

    /// The commit message
    pub message: String,

    /// When the commit was made
    pub committed_date: DateTime<Utc>,
}

/// Represents a pull request from a hosting platform.
///
/// This struct contains the information needed to decide whether a pull
/// request qualifies as a new version: filterable metadata plus the first
/// page of changed files and the continuation state for fetching more.
///
/// # Fields
///
/// * `number` - The pull request number
/// * `title` - The title of the pull request
/// * `base_branch` - The branch the pull request targets
/// * `state` - The review state (open, closed, merged)
/// * `is_draft` - Whether the pull request is a draft
/// * `is_cross_repository` - Whether the head branch lives in a fork
/// * `approved_review_count` - How many reviews approved the pull request
/// * `labels` - The labels currently on the pull request
/// * `tip` - The last commit on the head branch
/// * `closed_at` - When the pull request was closed, if it was
/// * `merged_at` - When the pull request was merged, if it was
/// * `files` - The first page of changed files
/// * `has_more_files` - Whether further file pages exist
/// * `files_cursor` - Continuation token for the next file page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// The pull request number
    pub number: u64,

    /// The title of the pull request
    pub title: String,

    /// The branch the pull request targets
    pub base_branch: String,

    /// The review state of the pull request
    pub state: PullRequestState,

    /// Whether the pull request is a draft
    pub is_draft: bool,

    /// Whether the head branch lives in a fork of the repository
    pub is_cross_repository: bool,

    /// The number of reviews that approved the pull request
    pub approved_review_count: u32,

    /// The labels currently on the pull request
    pub labels: Vec<Label>,

    /// The last commit on the head branch
    pub tip: CommitSummary,

    /// When the pull request was closed, if it was
    pub closed_at: Option<DateTime<Utc>>,

    /// When the pull request was merged, if it was
    pub merged_at: Option<DateTime<Utc>>,

    /// The first page of changed files, pre-populated by the provider
    pub files: Vec<ChangedFile>,

    /// Whether further pages of changed files exist
    pub has_more_files: bool,

    /// Continuation token for the next page of changed files
    pub files_cursor: Option<String>,
}

impl PullRequest {
    /// Returns the timestamp at which this pull request last changed state.
    ///
    /// Closed pull requests report the time they were closed and merged ones
    /// the time they were merged; open pull requests report the date of the
    /// tip commit. When the platform omits the close or merge timestamp the
    /// tip commit date is used instead.
    pub fn updated_date(&self) -> DateTime<Utc> {
        match self.state {
            PullRequestState::Open => self.tip.committed_date,
            PullRequestState::Closed => self.closed_at.unwrap_or(self.tip.committed_date),
            PullRequestState::Merged => self.merged_at.unwrap_or(self.tip.committed_date),
        }
    }
}
