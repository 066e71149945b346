mod common;

use std::sync::Arc;

use common::{RecordingPage, closed_port_url};
use portfolio_site::error::StatsError;
use portfolio_site::infrastructure::github::HttpGithubStats;
use portfolio_site::prelude::*;
use serde_json::json;
use url::Url;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpGithubStats {
    let base = Url::parse(&server.uri()).unwrap();
    HttpGithubStats::new(base.clone(), base).unwrap()
}

#[tokio::test]
async fn test_total_contributions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/octocat.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "contributions": [],
            "totalContributions": 842
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);

    assert_eq!(client.total_contributions("octocat").await.unwrap(), 842);
}

#[tokio::test]
async fn test_public_repos_sends_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "login": "octocat",
            "public_repos": 8
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    assert_eq!(client.public_repos("octocat").await.unwrap(), 8);
}

#[tokio::test]
async fn test_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/ghost-user"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let err = client.public_repos("ghost-user").await.unwrap_err();
    assert!(matches!(err, StatsError::Status(404)));
}

#[tokio::test]
async fn test_missing_field_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/octocat.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "total": 1 })))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let err = client.total_contributions("octocat").await.unwrap_err();
    assert!(matches!(err, StatsError::Decode(_)));
}

#[tokio::test]
async fn test_page_shows_counts_and_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/octocat.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalContributions": 842
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let page = RecordingPage::new();
    let stats = Arc::new(StatsService::new(
        Arc::new(client_for(&server)),
        page.clone(),
    ));

    for handle in stats.spawn_all("octocat") {
        handle.await.unwrap();
    }

    assert_eq!(
        page.text("#contribution").as_deref(),
        Some("842 Contributions")
    );
    assert_eq!(page.text("#repoCount").as_deref(), Some("N/A"));
}

#[tokio::test]
async fn test_enterprise_api_base_keeps_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/users/octocat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "public_repos": 12
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/contrib/v4/octocat.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalContributions": 5
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpGithubStats::new(
        Url::parse(&format!("{}/contrib/v4", server.uri())).unwrap(),
        Url::parse(&format!("{}/api/v3", server.uri())).unwrap(),
    )
    .unwrap();

    assert_eq!(client.public_repos("octocat").await.unwrap(), 12);
    assert_eq!(client.total_contributions("octocat").await.unwrap(), 5);
}

#[tokio::test]
async fn test_network_failure_shows_placeholder() {
    let base = closed_port_url();
    let client = HttpGithubStats::new(base.clone(), base).unwrap();

    let err = client.total_contributions("octocat").await.unwrap_err();
    assert!(matches!(err, StatsError::Transport(_)), "got {err:?}");

    let page = RecordingPage::new();
    let stats = StatsService::new(Arc::new(client), page.clone());

    stats.load_contributions("octocat", "#contribution").await;

    assert_eq!(page.text("#contribution").as_deref(), Some("N/A"));
}
