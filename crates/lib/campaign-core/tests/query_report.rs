use std::path::PathBuf;

use campaign_core::control::{CampaignControlPlane, ControlError, QueryType};
use campaign_core::store::StoreError;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn control_plane() -> CampaignControlPlane {
    CampaignControlPlane::from_path(fixture_path("campaigns.json"))
}

#[tokio::test]
async fn every_view_covers_every_record_without_a_filter() {
    let control = control_plane();
    for query in [
        QueryType::All,
        QueryType::Performance,
        QueryType::Subjects,
        QueryType::Metrics,
    ] {
        let report = control
            .get_campaign_data(query, None)
            .await
            .expect("query should succeed");
        for name in ["Spring Sale", "Summer Clearance", "Welcome Series"] {
            assert!(
                report.contains(&format!("Campaign: {name}")),
                "{} view should cover {name}",
                query.as_str()
            );
        }
    }
}

#[tokio::test]
async fn name_filter_narrows_to_one_record() {
    let control = control_plane();
    let report = control
        .get_campaign_data(QueryType::All, Some("Welcome Series"))
        .await
        .expect("query should succeed");

    assert!(report.contains("Campaign: Welcome Series"));
    assert!(!report.contains("Campaign: Spring Sale"));
    assert!(!report.contains("Campaign: Summer Clearance"));
}

#[tokio::test]
async fn name_filter_ignores_ascii_case() {
    let control = control_plane();
    let report = control
        .get_campaign_data(QueryType::All, Some("spring sale"))
        .await
        .expect("query should succeed");

    assert!(report.contains("Campaign: Spring Sale"));
}

#[tokio::test]
async fn unknown_campaign_is_not_found() {
    let control = control_plane();
    let err = control
        .get_campaign_data(QueryType::All, Some("Unknown"))
        .await
        .expect_err("query should fail");

    assert!(matches!(err, ControlError::CampaignNotFound(name) if name == "Unknown"));
}

#[tokio::test]
async fn performance_view_has_the_rate_but_not_the_subject() {
    let control = control_plane();
    let report = control
        .get_campaign_data(QueryType::Performance, Some("Spring Sale"))
        .await
        .expect("query should succeed");

    assert!(report.contains("0.42"));
    assert!(!report.contains("Spring into savings"));
}

#[tokio::test]
async fn subjects_view_has_no_revenue() {
    let control = control_plane();
    let report = control
        .get_campaign_data(QueryType::Subjects, None)
        .await
        .expect("query should succeed");

    assert!(report.contains("Subject: Spring into savings: 25% off everything"));
    assert!(!report.contains("Revenue"));
    assert!(!report.contains("15400"));
    assert!(!report.contains("9875"));
    assert!(!report.contains("4210"));
}

#[tokio::test]
async fn repeated_queries_are_byte_identical() {
    let control = control_plane();
    let first = control
        .get_campaign_data(QueryType::Metrics, None)
        .await
        .expect("query should succeed");
    let second = control
        .get_campaign_data(QueryType::Metrics, None)
        .await
        .expect("query should succeed");

    assert_eq!(first, second);
}

#[tokio::test]
async fn missing_source_file_is_a_store_error() {
    let control = CampaignControlPlane::from_path(fixture_path("nope.json"));
    let err = control
        .get_campaign_data(QueryType::All, None)
        .await
        .expect_err("query should fail");

    assert!(matches!(err, ControlError::Store(StoreError::Io { .. })));
}

#[tokio::test]
async fn malformed_source_file_is_a_store_error() {
    let control = CampaignControlPlane::from_path(fixture_path("malformed.json"));
    let err = control
        .get_campaign_data(QueryType::All, None)
        .await
        .expect_err("query should fail");

    assert!(matches!(err, ControlError::Store(StoreError::Parse { .. })));
}
