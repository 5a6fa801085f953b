#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use std::sync::Arc;
use tinylink::application::services::LinkService;
use tinylink::domain::entities::{NewUrlMapping, UrlMapping};
use tinylink::domain::repositories::{LinkRepository, RepositoryError};
use tinylink::infrastructure::persistence::InMemoryLinkRepository;
use tinylink::routes::build_router;
use tinylink::state::AppState;

pub const BASE_URL: &str = "http://sho.rt";

pub fn create_memory_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let link_service = LinkService::new(repo.clone() as Arc<dyn LinkRepository>, BASE_URL);

    (AppState::new(Arc::new(link_service)), repo)
}

pub fn create_state_with(repo: Arc<dyn LinkRepository>) -> AppState {
    AppState::new(Arc::new(LinkService::new(repo, BASE_URL)))
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(build_router(state)).unwrap()
}

pub async fn create_test_mapping(
    repo: &InMemoryLinkRepository,
    code: &str,
    url: &str,
) -> UrlMapping {
    repo.insert(NewUrlMapping {
        original_url: url.to_string(),
        short_code: code.to_string(),
    })
    .await
    .unwrap()
}

/// Repository whose backend is down: every call fails.
pub struct UnavailableRepository;

fn unavailable() -> RepositoryError {
    RepositoryError::Storage("connection refused".to_string())
}

#[async_trait]
impl LinkRepository for UnavailableRepository {
    async fn find_by_code(&self, _code: &str) -> Result<Option<UrlMapping>, RepositoryError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<UrlMapping>, RepositoryError> {
        Err(unavailable())
    }

    async fn insert(&self, _new_mapping: NewUrlMapping) -> Result<UrlMapping, RepositoryError> {
        Err(unavailable())
    }

    async fn increment_click_count(&self, _id: i64) -> Result<(), RepositoryError> {
        Err(unavailable())
    }

    async fn list_all_ordered_by_created_at_desc(&self) -> Result<Vec<UrlMapping>, RepositoryError> {
        Err(unavailable())
    }

    async fn delete_by_id(&self, _id: i64) -> Result<(), RepositoryError> {
        Err(unavailable())
    }

    async fn health_check(&self) -> bool {
        false
    }
}
