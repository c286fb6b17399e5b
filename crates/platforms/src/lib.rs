use async_trait::async_trait;

pub mod errors;

pub mod github;

pub mod models;
use errors::Error;
use models::{ChangedFilePage, PullRequest, PullRequestState};

/// Trait for reading pull requests from hosting platforms (e.g., GitHub, GitLab).
///
/// Implementations of this trait provide the two read-side operations the
/// check engine needs: listing pull requests in a set of review states, and
/// fetching further pages of a pull request's changed-file list.
///
/// # Example Implementation
///
/// ```rust,no_run
/// use pr_scout_platforms::{PullRequestProvider, errors::Error, models::{ChangedFilePage, PullRequest, PullRequestState}};
/// use async_trait::async_trait;
///
/// #[derive(Debug)]
/// struct GitHubProvider {
///     // Fields for authentication, etc.
///     token: String,
/// }
///
/// #[async_trait]
/// impl PullRequestProvider for GitHubProvider {
///     async fn list_pull_requests(
///         &self,
///         states: &[PullRequestState],
///     ) -> Result<Vec<PullRequest>, Error> {
///         // Implementation to list pull requests from the platform API
///         // ...
///         # unimplemented!()
///     }
///
///     # async fn get_changed_files(&self, _: &str, _: u32, _: Option<&str>) -> Result<ChangedFilePage, Error> { unimplemented!() }
/// }
/// ```
#[async_trait]
pub trait PullRequestProvider {
    /// Lists all pull requests whose review state is in `states`.
    ///
    /// Each returned pull request is pre-populated with its first page of
    /// changed files and the continuation cursor/has-more flag for that list.
    ///
    /// # Arguments
    ///
    /// * `states` - The review states to include
    ///
    /// # Returns
    ///
    /// A `Result` containing the matching pull requests
    async fn list_pull_requests(
        &self,
        states: &[PullRequestState],
    ) -> Result<Vec<PullRequest>, Error>;

    /// Retrieves the next page of changed files for a pull request.
    ///
    /// The cursor is the opaque continuation token from the previous page
    /// (or `None` for the first page). Page size is capped at 100 entries
    /// per call.
    ///
    /// # Arguments
    ///
    /// * `pr_number` - The pull request number, in decimal string form
    /// * `page_size` - The maximum number of files to return
    /// * `cursor` - Where the page begins, or `None` for the start
    ///
    /// # Returns
    ///
    /// A `Result` containing the page of files and its continuation state
    async fn get_changed_files(
        &self,
        pr_number: &str,
        page_size: u32,
        cursor: Option<&str>,
    ) -> Result<ChangedFilePage, Error>;
}
