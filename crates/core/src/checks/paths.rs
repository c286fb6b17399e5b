//! # Path Matching
//!
//! This module decides whether changed file paths are covered by a
//! glob-style pattern.
//!
//! A path is covered when the pattern matches it as a shell glob, or when
//! the pattern names an ancestor directory of the path. Glob wildcards never
//! cross `/`, so `*.txt` matches `file.txt` but not `test/file.txt`.

use globset::{GlobBuilder, GlobMatcher};

use pr_scout_platforms::models::ChangedFile;

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;

/// Compiles a glob pattern with per-segment wildcard semantics.
///
/// A malformed pattern is an error, never a silent non-match.
fn compile(pattern: &str) -> Result<GlobMatcher, globset::Error> {
    Ok(GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()?
        .compile_matcher())
}

/// Checks whether the child path is inside the parent path.
///
/// `foo/bar` is inside `foo`, but `foobar` is not inside `foo`.
/// `foo` is inside `foo`, but `foo` is not inside `foo/`.
pub fn is_inside_path(parent: &str, child: &str) -> bool {
    if parent == child {
        return true;
    }

    // Prefix matches only count on a directory separator boundary.
    let mut parent_with_trailing_slash = parent.to_string();
    if !parent_with_trailing_slash.ends_with('/') {
        parent_with_trailing_slash.push('/');
    }

    child.starts_with(&parent_with_trailing_slash)
}

/// Keeps the files the pattern covers, as a glob match or as an ancestor
/// directory.
pub fn filter_path(
    files: &[ChangedFile],
    pattern: &str,
) -> Result<Vec<ChangedFile>, globset::Error> {
    let matcher = compile(pattern)?;

    Ok(files
        .iter()
        .filter(|f| matcher.is_match(&f.path) || is_inside_path(pattern, &f.path))
        .cloned()
        .collect())
}

/// Keeps the files the pattern does not cover.
pub fn filter_ignore_path(
    files: &[ChangedFile],
    pattern: &str,
) -> Result<Vec<ChangedFile>, globset::Error> {
    let matcher = compile(pattern)?;

    Ok(files
        .iter()
        .filter(|f| !matcher.is_match(&f.path) && !is_inside_path(pattern, &f.path))
        .cloned()
        .collect())
}
