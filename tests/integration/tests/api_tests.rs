//! API Integration Tests
//!
//! Most tests run the server against the in-memory backend. The
//! `managed_backend` tests wire the server from configuration, exactly as
//! the binary does, and point it at a mock of the managed backend.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::sync::Arc;

use integration_tests::{
    assert_cors, assert_json, assert_status, test_config, FailureBody, ReadinessBody, Scenario,
    SweepBody, TestServer, ARCHIVE_PATH, SERVICE_KEY,
};
use pickup_service::memory::{FailPoint, InMemoryBackend};
use reqwest::{Method, StatusCode};

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let backend = Arc::new(InMemoryBackend::new());
    let server = TestServer::start(&backend).await.expect("Failed to start server");

    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let backend = Arc::new(InMemoryBackend::new());
    let server = TestServer::start(&backend).await.expect("Failed to start server");

    let response = server.get("/health/ready").await.expect("Request failed");
    let body: ReadinessBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.status, "ready");
}

#[tokio::test]
async fn test_health_ready_with_backend_down() {
    let backend = Arc::new(InMemoryBackend::new());
    backend.fail_on(FailPoint::Ping);
    let server = TestServer::start(&backend).await.expect("Failed to start server");

    let response = server.get("/health/ready").await.expect("Request failed");
    let body: ReadinessBody = assert_json(response, StatusCode::SERVICE_UNAVAILABLE)
        .await
        .unwrap();
    assert_eq!(body.status, "not_ready");
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let backend = Arc::new(InMemoryBackend::new());
    let server = TestServer::start(&backend).await.expect("Failed to start server");

    let response = server.get("/health").await.expect("Request failed");
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Sweep Trigger Tests
// ============================================================================

#[tokio::test]
async fn test_preflight_does_not_sweep() {
    let backend = Arc::new(InMemoryBackend::new());
    let scenario = Scenario::seed(&backend);
    let server = TestServer::start(&backend).await.expect("Failed to start server");

    let response = server
        .request(Method::OPTIONS, ARCHIVE_PATH)
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response);
    assert!(response.text().await.unwrap().is_empty());

    assert!(!backend.community(scenario.a).unwrap().archived);
    assert_eq!(backend.update_calls(), 0);
}

#[tokio::test]
async fn test_sweep_archives_started_games_only() {
    let backend = Arc::new(InMemoryBackend::new());
    let scenario = Scenario::seed(&backend);
    let server = TestServer::start(&backend).await.expect("Failed to start server");

    let response = server
        .request(Method::POST, ARCHIVE_PATH)
        .await
        .expect("Request failed");
    assert_cors(&response);
    assert_eq!(response.headers()["content-type"], "application/json");

    let body: SweepBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.success);
    assert_eq!(body.archived, 1);
    assert_eq!(body.message, "Archived 1 community");

    let a = backend.community(scenario.a).unwrap();
    assert!(a.archived);
    assert!(a.archived_at.is_some());
    assert!(!backend.community(scenario.b).unwrap().archived);

    let c = backend.community(scenario.c).unwrap();
    assert!(!c.archived);
    assert!(c.archived_at.is_none());
}

#[tokio::test]
async fn test_any_method_triggers_sweep() {
    let backend = Arc::new(InMemoryBackend::new());
    let scenario = Scenario::seed(&backend);
    let server = TestServer::start(&backend).await.expect("Failed to start server");

    let response = server.get(ARCHIVE_PATH).await.expect("Request failed");
    let body: SweepBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.archived, 1);
    assert!(backend.community(scenario.a).unwrap().archived);

    // The request body is ignored
    let response = server
        .post_json(ARCHIVE_PATH, &serde_json::json!({ "dry_run": true }))
        .await
        .expect("Request failed");
    let body: SweepBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.archived, 0);
}

#[tokio::test]
async fn test_second_sweep_archives_nothing() {
    let backend = Arc::new(InMemoryBackend::new());
    let scenario = Scenario::seed(&backend);
    let server = TestServer::start(&backend).await.expect("Failed to start server");

    let first = server.request(Method::POST, ARCHIVE_PATH).await.unwrap();
    let first: SweepBody = assert_json(first, StatusCode::OK).await.unwrap();
    assert_eq!(first.archived, 1);
    let archived_at = backend.community(scenario.a).unwrap().archived_at;

    let second = server.request(Method::POST, ARCHIVE_PATH).await.unwrap();
    let second: SweepBody = assert_json(second, StatusCode::OK).await.unwrap();
    assert!(second.success);
    assert_eq!(second.archived, 0);
    assert_eq!(backend.community(scenario.a).unwrap().archived_at, archived_at);
}

#[tokio::test]
async fn test_no_candidates() {
    let backend = Arc::new(InMemoryBackend::new());
    backend.add_community(None);
    let server = TestServer::start(&backend).await.expect("Failed to start server");

    let response = server.request(Method::POST, ARCHIVE_PATH).await.unwrap();
    let body: SweepBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(body.success);
    assert_eq!(body.archived, 0);
    assert_eq!(body.message, "No communities to archive");
    assert_eq!(backend.update_calls(), 0);
}

#[tokio::test]
async fn test_update_failure_returns_500() {
    let backend = Arc::new(InMemoryBackend::new());
    let scenario = Scenario::seed(&backend);
    backend.fail_on(FailPoint::Archive);
    let server = TestServer::start(&backend).await.expect("Failed to start server");

    let response = server.request(Method::POST, ARCHIVE_PATH).await.unwrap();
    assert_cors(&response);

    let body: FailureBody = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert!(!body.success);
    assert!(body.error.starts_with("Backend error"));
    assert!(!backend.community(scenario.a).unwrap().archived);
}

#[tokio::test]
async fn test_read_failure_returns_500() {
    let backend = Arc::new(InMemoryBackend::new());
    Scenario::seed(&backend);
    backend.fail_on(FailPoint::FindCommunities);
    let server = TestServer::start(&backend).await.expect("Failed to start server");

    let response = server.request(Method::POST, ARCHIVE_PATH).await.unwrap();
    let body: FailureBody = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert!(!body.success);
    assert_eq!(backend.update_calls(), 0);
}

#[tokio::test]
async fn test_concurrent_triggers_archive_once() {
    let backend = Arc::new(InMemoryBackend::new());
    Scenario::seed(&backend);
    let server = TestServer::start(&backend).await.expect("Failed to start server");

    let (first, second) = tokio::join!(
        server.request(Method::POST, ARCHIVE_PATH),
        server.request(Method::POST, ARCHIVE_PATH),
    );
    let first: SweepBody = assert_json(first.unwrap(), StatusCode::OK).await.unwrap();
    let second: SweepBody = assert_json(second.unwrap(), StatusCode::OK).await.unwrap();

    assert_eq!(first.archived + second.archived, 1);
}

// ============================================================================
// Managed Backend Tests
// ============================================================================

mod managed_backend {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[tokio::test]
    async fn test_sweep_through_rest_backend() {
        let mut backend = Server::new_async().await;
        let community = "0d9c2f7e-3a8b-4a51-9f64-4b3c2f1f0a01";
        let game = "7b1e5c3d-2f4a-4e8b-9c1d-5a6b7c8d9e02";

        let communities = backend
            .mock("GET", "/rest/v1/communities")
            .match_header("apikey", SERVICE_KEY)
            .match_query(Matcher::UrlEncoded("archived".into(), "eq.false".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!([{ "id": community, "game_id": game, "archived": false, "archived_at": null }])
                    .to_string(),
            )
            .create_async()
            .await;

        let games = backend
            .mock("GET", "/rest/v1/games")
            .match_query(Matcher::UrlEncoded("id".into(), format!("in.({game})")))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!([{ "id": game, "game_date": "2024-01-01", "start_time": "10:00:00" }])
                    .to_string(),
            )
            .create_async()
            .await;

        let update = backend
            .mock("PATCH", "/rest/v1/communities")
            .match_query(Matcher::UrlEncoded("id".into(), format!("in.({community})")))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!([{ "id": community }]).to_string())
            .create_async()
            .await;

        let config = test_config(&backend.url()).unwrap();
        let server = TestServer::start_with_config(config)
            .await
            .expect("Failed to start server");

        let response = server.request(Method::POST, ARCHIVE_PATH).await.unwrap();
        let body: SweepBody = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(body.archived, 1);

        communities.assert_async().await;
        games.assert_async().await;
        update.assert_async().await;
    }

    #[tokio::test]
    async fn test_backend_rejection_returns_500() {
        let mut backend = Server::new_async().await;

        backend
            .mock("GET", "/rest/v1/communities")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"Invalid API key"}"#)
            .create_async()
            .await;

        let config = test_config(&backend.url()).unwrap();
        let server = TestServer::start_with_config(config)
            .await
            .expect("Failed to start server");

        let response = server.request(Method::POST, ARCHIVE_PATH).await.unwrap();
        let body: FailureBody = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
            .await
            .unwrap();
        assert!(!body.success);
        assert!(body.error.contains("Invalid API key"));
    }
}
