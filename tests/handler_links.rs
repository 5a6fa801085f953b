mod common;

use axum::http::StatusCode;
use serde_json::json;
use tinylink::domain::repositories::LinkRepository;

#[tokio::test]
async fn test_list_empty() {
    let (state, _repo) = common::create_memory_state();
    let server = common::create_test_server(state);

    let response = server.get("/api/urls").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["count"], 0);
    assert_eq!(json["items"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_list_newest_first() {
    let (state, _repo) = common::create_memory_state();
    let server = common::create_test_server(state);

    for url in ["https://a.com", "https://b.com", "https://c.com"] {
        server
            .post("/api/shorten")
            .json(&json!({ "url": url }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let json = server.get("/api/urls").await.json::<serde_json::Value>();

    assert_eq!(json["count"], 3);
    let urls: Vec<&str> = json["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["original_url"].as_str().unwrap())
        .collect();
    assert_eq!(urls, vec!["https://c.com", "https://b.com", "https://a.com"]);
}

#[tokio::test]
async fn test_list_reflects_clicks() {
    let (state, repo) = common::create_memory_state();
    let server = common::create_test_server(state);

    common::create_test_mapping(&repo, "seen01", "https://example.com").await;
    server.get("/seen01").await;
    server.get("/seen01").await;

    let json = server.get("/api/urls").await.json::<serde_json::Value>();

    let item = &json["items"][0];
    assert_eq!(item["short_code"], "seen01");
    assert_eq!(item["click_count"], 2);
    assert_eq!(item["short_url"], format!("{}/seen01", common::BASE_URL));
}

#[tokio::test]
async fn test_delete_success() {
    let (state, repo) = common::create_memory_state();
    let server = common::create_test_server(state);

    let mapping = common::create_test_mapping(&repo, "del001", "https://example.com").await;

    let response = server.delete(&format!("/api/urls/{}", mapping.id)).await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], mapping.id);
    assert_eq!(json["short_code"], "del001");
    assert_eq!(json["original_url"], "https://example.com");
    assert_eq!(json["short_url"], format!("{}/del001", common::BASE_URL));
    assert!(repo.find_by_id(mapping.id).await.unwrap().is_none());
    server.get("/del001").await.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_twice_is_not_found() {
    let (state, repo) = common::create_memory_state();
    let server = common::create_test_server(state);

    let mapping = common::create_test_mapping(&repo, "del002", "https://example.com").await;
    let path = format!("/api/urls/{}", mapping.id);

    server.delete(&path).await.assert_status_ok();

    let response = server.delete(&path).await;
    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_delete_returns_click_count() {
    let (state, repo) = common::create_memory_state();
    let server = common::create_test_server(state);

    let mapping = common::create_test_mapping(&repo, "del003", "https://example.com").await;
    server.get("/del003").await;

    let json = server
        .delete(&format!("/api/urls/{}", mapping.id))
        .await
        .json::<serde_json::Value>();

    assert_eq!(json["click_count"], 1);
}

#[tokio::test]
async fn test_delete_non_numeric_id() {
    let (state, _repo) = common::create_memory_state();
    let server = common::create_test_server(state);

    let response = server.delete("/api/urls/abc").await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}
