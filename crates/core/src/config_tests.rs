use super::*;
use chrono::{DateTime, TimeZone, Utc};

#[test]
fn test_minimal_check_request_uses_defaults() {
    let request: CheckRequest = serde_json::from_str(
        r#"{
            "source": {
                "repository": "itsdalmo/test-repository",
                "access_token": "oauthtoken"
            }
        }"#,
    )
    .unwrap();

    assert_eq!(request.source.repository, "itsdalmo/test-repository");
    assert_eq!(request.source.access_token, "oauthtoken");
    assert!(request.source.endpoint.is_none());
    assert!(request.source.states.is_empty());
    assert!(!request.source.disable_ci_skip);
    assert!(request.source.base_branch.is_empty());
    assert!(request.source.labels.is_empty());
    assert!(!request.source.disable_forks);
    assert!(!request.source.ignore_drafts);
    assert_eq!(request.source.required_review_approvals, 0);
    assert!(request.source.paths.is_empty());
    assert!(request.source.ignore_paths.is_empty());

    // A missing version is the "no prior version seen" sentinel.
    assert!(request.version.pr.is_empty());
    assert_eq!(request.version.committed, DateTime::UNIX_EPOCH);
}

#[test]
fn test_full_check_request_round_trips() {
    let request: CheckRequest = serde_json::from_str(
        r#"{
            "source": {
                "repository": "itsdalmo/test-repository",
                "access_token": "oauthtoken",
                "endpoint": "https://github.example.com/api",
                "states": ["OPEN", "MERGED"],
                "disable_ci_skip": true,
                "base_branch": "develop",
                "labels": ["enhancement", "wontfix"],
                "disable_forks": true,
                "ignore_drafts": true,
                "required_review_approvals": 2,
                "paths": ["terraform/*/*.tf"],
                "ignore_paths": ["*.md"]
            },
            "version": {
                "pr": "4",
                "commit": "oid4",
                "committed": "2018-05-07T08:43:48Z"
            }
        }"#,
    )
    .unwrap();

    assert_eq!(
        request.source.states,
        vec![
            pr_scout_platforms::models::PullRequestState::Open,
            pr_scout_platforms::models::PullRequestState::Merged,
        ]
    );
    assert!(request.source.disable_ci_skip);
    assert_eq!(request.source.base_branch, "develop");
    assert_eq!(request.source.labels, vec!["enhancement", "wontfix"]);
    assert!(request.source.disable_forks);
    assert!(request.source.ignore_drafts);
    assert_eq!(request.source.required_review_approvals, 2);
    assert_eq!(request.source.paths, vec!["terraform/*/*.tf"]);
    assert_eq!(request.source.ignore_paths, vec!["*.md"]);

    assert_eq!(request.version.pr, "4");
    assert_eq!(request.version.commit, "oid4");
    assert_eq!(
        request.version.committed,
        Utc.with_ymd_and_hms(2018, 5, 7, 8, 43, 48).unwrap()
    );
}

#[test]
fn test_unknown_state_names_are_rejected() {
    let result = serde_json::from_str::<Source>(
        r#"{"repository": "o/r", "states": ["REOPENED"]}"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_skip_ci_regex_compiles() {
    assert!(SKIP_CI_REGEX.is_match("[skip ci]"));
    assert!(!SKIP_CI_REGEX.is_match("skip ci"));
}
