//! # Skip-Marker Detection
//!
//! This module detects the conventional `[ci skip]`/`[skip ci]` markers that
//! authors place in pull request titles or commit messages to suppress
//! automated processing.

use crate::config::SKIP_CI_REGEX;

#[cfg(test)]
#[path = "skip_ci_tests.rs"]
mod tests;

/// Returns true if the text contains `[ci skip]` or `[skip ci]`.
///
/// The search is case-insensitive and unanchored, and is total over
/// arbitrary input: text containing regex metacharacters is matched
/// literally, never an error.
///
/// # Examples
///
/// ```
/// use pr_scout_core::checks::skip_ci::contains_skip_marker;
///
/// assert!(contains_skip_marker("fix typo [skip ci]"));
/// assert!(!contains_skip_marker("fix typo"));
/// ```
pub fn contains_skip_marker(text: &str) -> bool {
    // Use the pre-compiled regex from config
    SKIP_CI_REGEX.is_match(text)
}
