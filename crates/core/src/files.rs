//! # Wanted-Files Resolution
//!
//! This module decides whether a pull request touches at least one "wanted"
//! file: a file that survives the include path patterns (or is unconstrained
//! by them) and every ignore path pattern.
//!
//! The changed-file list is paginated by the platform, so the resolver works
//! page by page: it stops at the first page containing a wanted file and only
//! fetches further pages while no match has been found. A pull request with
//! an early matching file never pays for full file-list retrieval.

use tracing::debug;

use crate::checks::paths::{filter_ignore_path, filter_path};
use crate::config::CHANGED_FILES_PAGE_SIZE;
use crate::errors::CheckError;
use pr_scout_platforms::models::ChangedFile;
use pr_scout_platforms::PullRequestProvider;

#[cfg(test)]
#[path = "files_tests.rs"]
mod tests;

/// Determines whether the pull request contains at least one wanted file.
///
/// `files`, `has_more` and `cursor` describe the page of changed files known
/// so far, as pre-populated on the pull request by the provider. Further
/// pages are fetched from `provider` on demand, one at a time, because each
/// page's emptiness decides whether the next page is needed.
///
/// # Arguments
///
/// * `provider` - The platform collaborator to fetch further pages from
/// * `pr_number` - The pull request number, in decimal string form
/// * `paths` - Include patterns; empty means all files are candidates
/// * `ignore_paths` - Exclude patterns, each narrowing the candidate set
/// * `files` - The changed files known so far
/// * `has_more` - Whether further pages of files exist
/// * `cursor` - Continuation token for the next page
///
/// # Returns
///
/// A `Result` containing whether a wanted file exists. Any fetch error
/// during pagination is surfaced immediately; it is not retried here.
pub async fn has_wanted_files<P: PullRequestProvider>(
    provider: &P,
    pr_number: &str,
    paths: &[String],
    ignore_paths: &[String],
    files: Vec<ChangedFile>,
    has_more: bool,
    cursor: Option<String>,
) -> Result<bool, CheckError> {
    let mut files = files;
    let mut has_more = has_more;
    let mut cursor = cursor;

    loop {
        // Files are wanted when they appear under the include patterns and
        // survive every ignore pattern.
        let mut wanted = Vec::new();
        if !paths.is_empty() {
            for pattern in paths {
                let mut matched =
                    filter_path(&files, pattern).map_err(|e| CheckError::PathPattern {
                        pattern: pattern.clone(),
                        source: e,
                    })?;
                wanted.append(&mut matched);
            }
        } else {
            wanted = std::mem::take(&mut files);
        }

        for pattern in ignore_paths {
            wanted =
                filter_ignore_path(&wanted, pattern).map_err(|e| CheckError::IgnorePathPattern {
                    pattern: pattern.clone(),
                    source: e,
                })?;
        }

        if !wanted.is_empty() {
            return Ok(true);
        }

        if !has_more {
            // No wanted files were found and there are no more pages to
            // examine.
            return Ok(false);
        }

        debug!(
            pull_request = pr_number,
            "No wanted files yet, fetching the next page of changed files",
        );

        let page = provider
            .get_changed_files(pr_number, CHANGED_FILES_PAGE_SIZE, cursor.as_deref())
            .await
            .map_err(|e| CheckError::GetChangedFiles {
                pr: pr_number.to_string(),
                source: e,
            })?;

        files = page.files;
        has_more = page.has_next_page;
        cursor = page.end_cursor;
    }
}
