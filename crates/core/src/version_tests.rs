use super::*;
use chrono::TimeZone;
use pr_scout_platforms::models::{CommitSummary, PullRequestState};

fn version(pr: &str, committed: DateTime<Utc>) -> Version {
    Version {
        pr: pr.to_string(),
        commit: format!("oid{}", pr),
        committed,
    }
}

#[test]
fn test_default_version_means_no_prior_version() {
    let version = Version::default();
    assert!(version.pr.is_empty());
    assert!(version.commit.is_empty());
    assert_eq!(version.committed, DateTime::UNIX_EPOCH);
}

#[test]
fn test_sort_versions_orders_ascending_by_timestamp() {
    let base = Utc.with_ymd_and_hms(2018, 5, 11, 8, 43, 48).unwrap();
    let mut versions = vec![
        version("1", base + chrono::Duration::days(2)),
        version("2", base),
        version("3", base + chrono::Duration::days(1)),
    ];

    sort_versions(&mut versions);

    let order: Vec<&str> = versions.iter().map(|v| v.pr.as_str()).collect();
    assert_eq!(order, vec!["2", "3", "1"]);
}

#[test]
fn test_sort_versions_is_stable_for_equal_timestamps() {
    let base = Utc.with_ymd_and_hms(2018, 5, 11, 8, 43, 48).unwrap();
    let mut versions = vec![version("7", base), version("3", base), version("5", base)];

    sort_versions(&mut versions);

    let order: Vec<&str> = versions.iter().map(|v| v.pr.as_str()).collect();
    assert_eq!(order, vec!["7", "3", "5"]);
}

#[test]
fn test_from_pull_request_uses_the_updated_date() {
    let base = Utc.with_ymd_and_hms(2018, 5, 11, 8, 43, 48).unwrap();
    let closed = base + chrono::Duration::hours(6);

    let pr = PullRequest {
        number: 9,
        title: "pr9 title".to_string(),
        base_branch: "main".to_string(),
        state: PullRequestState::Closed,
        is_draft: false,
        is_cross_repository: false,
        approved_review_count: 0,
        labels: Vec::new(),
        tip: CommitSummary {
            sha: "oid9".to_string(),
            message: "commit message 9".to_string(),
            committed_date: base,
        },
        closed_at: Some(closed),
        merged_at: None,
        files: Vec::new(),
        has_more_files: false,
        files_cursor: None,
    };

    let version = Version::from_pull_request(&pr);
    assert_eq!(version.pr, "9");
    assert_eq!(version.commit, "oid9");
    assert_eq!(version.committed, closed);
}

#[test]
fn test_version_wire_format() {
    let version = version("4", Utc.with_ymd_and_hms(2018, 5, 11, 8, 43, 48).unwrap());
    let encoded = serde_json::to_value(&version).unwrap();

    assert_eq!(
        encoded,
        serde_json::json!({
            "pr": "4",
            "commit": "oid4",
            "committed": "2018-05-11T08:43:48Z"
        })
    );
}
