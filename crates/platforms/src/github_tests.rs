use super::*;
use chrono::TimeZone;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn provider_for(server: &MockServer) -> GitHubProvider {
    let client = create_token_client("test-token", Some(&server.uri()))
        .expect("Failed to build test client");
    GitHubProvider::new(client, "itsdalmo".to_string(), "test-repository".to_string())
}

fn pull_request_node(number: u64) -> serde_json::Value {
    json!({
        "number": number,
        "title": format!("pr{} title", number),
        "baseRefName": "main",
        "isCrossRepository": false,
        "isDraft": false,
        "state": "OPEN",
        "closedAt": null,
        "mergedAt": null,
        "labels": { "nodes": [{ "name": "enhancement" }] },
        "commits": {
            "nodes": [{
                "commit": {
                    "oid": format!("oid{}", number),
                    "message": format!("commit message {}", number),
                    "committedDate": "2018-05-11T08:43:48Z"
                }
            }]
        },
        "reviews": { "totalCount": 2 },
        "files": {
            "pageInfo": { "hasNextPage": true, "endCursor": "file-cursor-1" },
            "nodes": [{ "path": "README.md" }, { "path": "travis.yml" }]
        }
    })
}

fn list_page(nodes: Vec<serde_json::Value>, end_cursor: Option<&str>) -> serde_json::Value {
    json!({
        "data": {
            "repository": {
                "pullRequests": {
                    "pageInfo": {
                        "hasNextPage": end_cursor.is_some(),
                        "endCursor": end_cursor
                    },
                    "nodes": nodes
                }
            }
        }
    })
}

#[tokio::test]
async fn test_list_pull_requests_maps_response_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(list_page(vec![pull_request_node(1)], None)),
        )
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    let pulls = provider
        .list_pull_requests(&[PullRequestState::Open])
        .await
        .unwrap();

    assert_eq!(
        pulls,
        vec![PullRequest {
            number: 1,
            title: "pr1 title".to_string(),
            base_branch: "main".to_string(),
            state: PullRequestState::Open,
            is_draft: false,
            is_cross_repository: false,
            approved_review_count: 2,
            labels: vec![Label {
                name: "enhancement".to_string()
            }],
            tip: CommitSummary {
                sha: "oid1".to_string(),
                message: "commit message 1".to_string(),
                committed_date: Utc.with_ymd_and_hms(2018, 5, 11, 8, 43, 48).unwrap(),
            },
            closed_at: None,
            merged_at: None,
            files: vec![
                ChangedFile {
                    path: "README.md".to_string()
                },
                ChangedFile {
                    path: "travis.yml".to_string()
                },
            ],
            has_more_files: true,
            files_cursor: Some("file-cursor-1".to_string()),
        }]
    );
}

#[tokio::test]
async fn test_list_pull_requests_sends_states_and_follows_cursor() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({
            "variables": { "states": ["CLOSED", "MERGED"], "after": null }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(list_page(vec![pull_request_node(1)], Some("pr-cursor-1"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({
            "variables": { "states": ["CLOSED", "MERGED"], "after": "pr-cursor-1" }
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(list_page(vec![pull_request_node(2)], None)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    let pulls = provider
        .list_pull_requests(&[PullRequestState::Closed, PullRequestState::Merged])
        .await
        .unwrap();

    let numbers: Vec<u64> = pulls.iter().map(|p| p.number).collect();
    assert_eq!(numbers, vec![1, 2]);
}

#[tokio::test]
async fn test_get_changed_files_passes_cursor_through() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({
            "variables": { "number": 7, "first": 100, "after": "file-cursor-3" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "repository": {
                    "pullRequest": {
                        "files": {
                            "pageInfo": { "hasNextPage": true, "endCursor": "file-cursor-4" },
                            "nodes": [{ "path": "terraform/modules/ecs/main.tf" }]
                        }
                    }
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    let page = provider
        .get_changed_files("7", 100, Some("file-cursor-3"))
        .await
        .unwrap();

    assert_eq!(
        page,
        ChangedFilePage {
            files: vec![ChangedFile {
                path: "terraform/modules/ecs/main.tf".to_string()
            }],
            has_next_page: true,
            end_cursor: Some("file-cursor-4".to_string()),
        }
    );
}

#[tokio::test]
async fn test_get_changed_files_caps_page_size() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({
            "variables": { "number": 7, "first": 100, "after": null }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "repository": {
                    "pullRequest": {
                        "files": {
                            "pageInfo": { "hasNextPage": false, "endCursor": null },
                            "nodes": []
                        }
                    }
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    let page = provider.get_changed_files("7", 250, None).await.unwrap();

    assert!(page.files.is_empty());
    assert!(!page.has_next_page);
}

#[tokio::test]
async fn test_missing_repository_is_an_invalid_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "repository": null } })),
        )
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;

    let result = provider.list_pull_requests(&[PullRequestState::Open]).await;
    assert!(matches!(result, Err(Error::InvalidResponse)));

    let result = provider.get_changed_files("7", 100, None).await;
    assert!(matches!(result, Err(Error::InvalidResponse)));
}

#[tokio::test]
async fn test_api_failure_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Bad credentials",
            "documentation_url": "https://docs.github.com/graphql"
        })))
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    let result = provider.list_pull_requests(&[PullRequestState::Open]).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_get_changed_files_rejects_malformed_pull_request_number() {
    let server = MockServer::start().await;
    let provider = provider_for(&server).await;

    let result = provider.get_changed_files("not-a-number", 100, None).await;
    assert!(matches!(result, Err(Error::InvalidResponse)));
}
