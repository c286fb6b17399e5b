use async_trait::async_trait;
use chrono::{DateTime, Utc};
use octocrab::Octocrab;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error, instrument};

use crate::{
    errors::Error,
    models::{ChangedFile, ChangedFilePage, CommitSummary, Label, PullRequest, PullRequestState},
    PullRequestProvider,
};

#[cfg(test)]
#[path = "github_tests.rs"]
mod tests;

/// The maximum number of changed files the platform returns per page.
const MAX_FILE_PAGE_SIZE: u32 = 100;

/// Creates an `Octocrab` client authenticated with a personal access token.
///
/// # Arguments
///
/// * `token` - The personal access token.
/// * `endpoint` - An alternate API base URI, for GitHub Enterprise installs.
///   `None` targets the public GitHub API.
///
/// # Returns
///
/// A `Result` containing the authenticated client, or an `Error` if the
/// endpoint cannot be parsed or the client cannot be built.
///
/// # Example
///
/// ```rust,no_run
/// use pr_scout_platforms::github::create_token_client;
///
/// let client = create_token_client("ghp_example", None).unwrap();
/// ```
#[instrument(skip(token))]
pub fn create_token_client(token: &str, endpoint: Option<&str>) -> Result<Octocrab, Error> {
    let mut builder = Octocrab::builder().personal_token(token.to_string());

    if let Some(base_uri) = endpoint {
        builder = builder.base_uri(base_uri).map_err(|_| {
            Error::AuthError(format!("Invalid API endpoint: {}", base_uri).to_string())
        })?;
    }

    builder.build().map_err(|_| Error::ApiError())
}

fn log_octocrab_error(message: &str, e: octocrab::Error) {
    match e {
        octocrab::Error::GitHub { source, backtrace } => {
            let err = *source;
            error!(
                error_message = err.message,
                backtrace = backtrace.to_string(),
                "{}. Received an error from GitHub",
                message
            )
        }
        octocrab::Error::UriParse { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}. Failed to parse URI.",
            message
        ),
        octocrab::Error::Uri { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}, Failed to parse URI.",
            message
        ),
        octocrab::Error::InvalidHeaderValue { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}. One of the header values was invalid.",
            message
        ),
        octocrab::Error::InvalidUtf8 { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}. The message wasn't valid UTF-8.",
            message,
        ),
        _ => error!(error_message = e.to_string(), message),
    };
}

/// GraphQL query for listing pull requests in a set of states, including the
/// first page of changed files for each.
const LIST_PULL_REQUESTS_QUERY: &str = r#"
    query($owner: String!, $name: String!, $states: [PullRequestState!]!, $after: String) {
        repository(owner: $owner, name: $name) {
            pullRequests(first: 100, states: $states, after: $after) {
                pageInfo {
                    hasNextPage
                    endCursor
                }
                nodes {
                    number
                    title
                    baseRefName
                    isCrossRepository
                    isDraft
                    state
                    closedAt
                    mergedAt
                    labels(first: 100) {
                        nodes {
                            name
                        }
                    }
                    commits(last: 1) {
                        nodes {
                            commit {
                                oid
                                message
                                committedDate
                            }
                        }
                    }
                    reviews(states: APPROVED) {
                        totalCount
                    }
                    files(first: 100) {
                        pageInfo {
                            hasNextPage
                            endCursor
                        }
                        nodes {
                            path
                        }
                    }
                }
            }
        }
    }
"#;

/// GraphQL query for one page of a pull request's changed files.
const CHANGED_FILES_QUERY: &str = r#"
    query($owner: String!, $name: String!, $number: Int!, $first: Int!, $after: String) {
        repository(owner: $owner, name: $name) {
            pullRequest(number: $number) {
                files(first: $first, after: $after) {
                    pageInfo {
                        hasNextPage
                        endCursor
                    }
                    nodes {
                        path
                    }
                }
            }
        }
    }
"#;

#[derive(Debug, Deserialize)]
struct PageInfo {
    #[serde(rename = "hasNextPage")]
    has_next_page: bool,
    #[serde(rename = "endCursor")]
    end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    data: ListData,
}

#[derive(Debug, Deserialize)]
struct ListData {
    repository: Option<ListRepository>,
}

#[derive(Debug, Deserialize)]
struct ListRepository {
    #[serde(rename = "pullRequests")]
    pull_requests: PullRequestConnection,
}

#[derive(Debug, Deserialize)]
struct PullRequestConnection {
    #[serde(rename = "pageInfo")]
    page_info: PageInfo,
    nodes: Vec<PullRequestNode>,
}

#[derive(Debug, Deserialize)]
struct PullRequestNode {
    number: u64,
    title: String,
    #[serde(rename = "baseRefName")]
    base_ref_name: String,
    #[serde(rename = "isCrossRepository")]
    is_cross_repository: bool,
    #[serde(rename = "isDraft")]
    is_draft: bool,
    state: PullRequestState,
    #[serde(rename = "closedAt")]
    closed_at: Option<DateTime<Utc>>,
    #[serde(rename = "mergedAt")]
    merged_at: Option<DateTime<Utc>>,
    labels: LabelConnection,
    commits: CommitConnection,
    reviews: ReviewConnection,
    files: FileConnection,
}

#[derive(Debug, Deserialize)]
struct LabelConnection {
    nodes: Vec<LabelNode>,
}

#[derive(Debug, Deserialize)]
struct LabelNode {
    name: String,
}

#[derive(Debug, Deserialize)]
struct CommitConnection {
    nodes: Vec<CommitEdge>,
}

#[derive(Debug, Deserialize)]
struct CommitEdge {
    commit: CommitNode,
}

#[derive(Debug, Deserialize)]
struct CommitNode {
    oid: String,
    message: String,
    #[serde(rename = "committedDate")]
    committed_date: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct ReviewConnection {
    #[serde(rename = "totalCount")]
    total_count: u32,
}

#[derive(Debug, Deserialize)]
struct FileConnection {
    #[serde(rename = "pageInfo")]
    page_info: PageInfo,
    nodes: Vec<FileNode>,
}

#[derive(Debug, Deserialize)]
struct FileNode {
    path: String,
}

#[derive(Debug, Deserialize)]
struct FilesResponse {
    data: FilesData,
}

#[derive(Debug, Deserialize)]
struct FilesData {
    repository: Option<FilesRepository>,
}

#[derive(Debug, Deserialize)]
struct FilesRepository {
    #[serde(rename = "pullRequest")]
    pull_request: Option<FilesPullRequest>,
}

#[derive(Debug, Deserialize)]
struct FilesPullRequest {
    files: FileConnection,
}

impl TryFrom<PullRequestNode> for PullRequest {
    type Error = Error;

    fn try_from(node: PullRequestNode) -> Result<Self, Error> {
        // A pull request always has at least one commit; a response without
        // one is malformed.
        let tip = node
            .commits
            .nodes
            .into_iter()
            .next()
            .ok_or(Error::InvalidResponse)?
            .commit;

        Ok(PullRequest {
            number: node.number,
            title: node.title,
            base_branch: node.base_ref_name,
            state: node.state,
            is_draft: node.is_draft,
            is_cross_repository: node.is_cross_repository,
            approved_review_count: node.reviews.total_count,
            labels: node
                .labels
                .nodes
                .into_iter()
                .map(|l| Label { name: l.name })
                .collect(),
            tip: CommitSummary {
                sha: tip.oid,
                message: tip.message,
                committed_date: tip.committed_date,
            },
            closed_at: node.closed_at,
            merged_at: node.merged_at,
            files: node
                .files
                .nodes
                .into_iter()
                .map(|f| ChangedFile { path: f.path })
                .collect(),
            has_more_files: node.files.page_info.has_next_page,
            files_cursor: node.files.page_info.end_cursor,
        })
    }
}

/// A [`PullRequestProvider`] that reads pull requests from a single GitHub
/// repository through the GraphQL v4 API.
#[derive(Debug)]
pub struct GitHubProvider {
    client: Octocrab,
    owner: String,
    name: String,
}

impl GitHubProvider {
    /// Creates a provider bound to one repository.
    pub fn new(client: Octocrab, owner: String, name: String) -> Self {
        Self {
            client,
            owner,
            name,
        }
    }
}

#[async_trait]
impl PullRequestProvider for GitHubProvider {
    #[instrument]
    async fn list_pull_requests(
        &self,
        states: &[PullRequestState],
    ) -> Result<Vec<PullRequest>, Error> {
        let mut pull_requests = Vec::new();
        let mut after: Option<String> = None;

        loop {
            let response: ListResponse = match self
                .client
                .graphql(&json!({
                    "query": LIST_PULL_REQUESTS_QUERY,
                    "variables": {
                        "owner": self.owner,
                        "name": self.name,
                        "states": states,
                        "after": after,
                    }
                }))
                .await
            {
                Ok(r) => r,
                Err(e) => {
                    log_octocrab_error("Failed to list pull requests", e);
                    return Err(Error::InvalidResponse);
                }
            };

            let connection = response
                .data
                .repository
                .ok_or(Error::InvalidResponse)?
                .pull_requests;

            for node in connection.nodes {
                pull_requests.push(PullRequest::try_from(node)?);
            }

            if !connection.page_info.has_next_page {
                break;
            }

            after = connection.page_info.end_cursor;
            if after.is_none() {
                break;
            }
        }

        debug!(
            repository_owner = self.owner,
            repository = self.name,
            count = pull_requests.len(),
            "Listed pull requests",
        );

        Ok(pull_requests)
    }

    #[instrument]
    async fn get_changed_files(
        &self,
        pr_number: &str,
        page_size: u32,
        cursor: Option<&str>,
    ) -> Result<ChangedFilePage, Error> {
        let number: u64 = pr_number.parse().map_err(|_| Error::InvalidResponse)?;
        let first = page_size.min(MAX_FILE_PAGE_SIZE);

        let response: FilesResponse = match self
            .client
            .graphql(&json!({
                "query": CHANGED_FILES_QUERY,
                "variables": {
                    "owner": self.owner,
                    "name": self.name,
                    "number": number,
                    "first": first,
                    "after": cursor,
                }
            }))
            .await
        {
            Ok(r) => r,
            Err(e) => {
                log_octocrab_error("Failed to get changed files for pull request", e);
                return Err(Error::InvalidResponse);
            }
        };

        let files = response
            .data
            .repository
            .and_then(|r| r.pull_request)
            .ok_or(Error::InvalidResponse)?
            .files;

        debug!(
            repository_owner = self.owner,
            repository = self.name,
            pull_request = pr_number,
            count = files.nodes.len(),
            "Fetched a page of changed files",
        );

        Ok(ChangedFilePage {
            files: files
                .nodes
                .into_iter()
                .map(|f| ChangedFile { path: f.path })
                .collect(),
            has_next_page: files.page_info.has_next_page,
            end_cursor: files.page_info.end_cursor,
        })
    }
}
