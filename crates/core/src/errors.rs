use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that abort a check invocation.
///
/// There is no partial-result mode: when any of these occurs the check
/// produces no version list and the caller should treat the current version
/// state as unknown, leaving the previous watermark in force.
#[derive(Error, Debug)]
pub enum CheckError {
    /// The platform collaborator could not list pull requests.
    #[error("Failed to list pull requests")]
    ListPullRequests(#[source] pr_scout_platforms::errors::Error),

    /// A page of changed files could not be fetched during pagination.
    #[error("Failed to get changed files for pull request {pr}")]
    GetChangedFiles {
        /// The pull request whose files were being fetched
        pr: String,
        /// The underlying platform error
        #[source]
        source: pr_scout_platforms::errors::Error,
    },

    /// An include path pattern is not a valid glob.
    #[error("Invalid path pattern: '{pattern}'")]
    PathPattern {
        /// The offending pattern
        pattern: String,
        /// The underlying glob error
        #[source]
        source: globset::Error,
    },

    /// An ignore path pattern is not a valid glob.
    #[error("Invalid ignore path pattern: '{pattern}'")]
    IgnorePathPattern {
        /// The offending pattern
        pattern: String,
        /// The underlying glob error
        #[source]
        source: globset::Error,
    },
}
