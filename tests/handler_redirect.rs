mod common;

use axum::http::StatusCode;
use std::sync::Arc;
use tinylink::domain::repositories::LinkRepository;

#[tokio::test]
async fn test_redirect_success() {
    let (state, repo) = common::create_memory_state();
    let server = common::create_test_server(state);

    common::create_test_mapping(&repo, "aB3xY9", "https://example.com/target").await;

    let response = server.get("/aB3xY9").await;

    response.assert_status(StatusCode::PERMANENT_REDIRECT);
    assert_eq!(
        response.header("location").to_str().unwrap(),
        "https://example.com/target"
    );
}

#[tokio::test]
async fn test_redirect_counts_clicks() {
    let (state, repo) = common::create_memory_state();
    let server = common::create_test_server(state);

    let mapping = common::create_test_mapping(&repo, "click1", "https://example.com").await;

    for _ in 0..3 {
        server
            .get("/click1")
            .await
            .assert_status(StatusCode::PERMANENT_REDIRECT);
    }

    let stored = repo.find_by_id(mapping.id).await.unwrap().unwrap();
    assert_eq!(stored.click_count, 3);
}

#[tokio::test]
async fn test_redirect_via_api_prefix() {
    let (state, repo) = common::create_memory_state();
    let server = common::create_test_server(state);

    let mapping = common::create_test_mapping(&repo, "apiRed", "https://example.com").await;

    let response = server.get("/api/apiRed").await;

    response.assert_status(StatusCode::PERMANENT_REDIRECT);

    let stored = repo.find_by_id(mapping.id).await.unwrap().unwrap();
    assert_eq!(stored.click_count, 1);
}

#[tokio::test]
async fn test_redirect_unknown_code() {
    let (state, _repo) = common::create_memory_state();
    let server = common::create_test_server(state);

    let response = server.get("/Zz9Zz9").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_redirect_malformed_codes_are_not_found() {
    let (state, _repo) = common::create_memory_state();
    let server = common::create_test_server(state);

    for path in ["/abc", "/ab!de6", "/abcdefg"] {
        server.get(path).await.assert_status_not_found();
    }
}

#[tokio::test]
async fn test_redirect_deleted_code_is_not_found() {
    let (state, repo) = common::create_memory_state();
    let server = common::create_test_server(state);

    let mapping = common::create_test_mapping(&repo, "gone01", "https://example.com").await;
    repo.delete_by_id(mapping.id).await.unwrap();

    server.get("/gone01").await.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_storage_down_is_internal_error() {
    let state = common::create_state_with(Arc::new(common::UnavailableRepository));
    let server = common::create_test_server(state);

    let response = server.get("/aB3xY9").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}
