//! Handlers for URL mapping management endpoints (list, delete).

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::links::{ListResponse, UrlMappingResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all URL mappings, newest first.
///
/// # Endpoint
///
/// `GET /api/urls`
///
/// # Response
///
/// ```json
/// {
///   "count": 1,
///   "items": [
///     {
///       "id": 1,
///       "original_url": "https://example.com",
///       "short_url": "http://localhost:3000/aB3xY9",
///       "short_code": "aB3xY9",
///       "click_count": 42,
///       "created_at": "2025-01-01T12:00:00Z"
///     }
///   ]
/// }
/// ```
pub async fn list_urls_handler(
    State(state): State<AppState>,
) -> Result<Json<ListResponse>, AppError> {
    let mappings = state.link_service.list_all().await?;

    let items: Vec<UrlMappingResponse> = mappings
        .into_iter()
        .map(|mapping| {
            let short_url = state.link_service.short_url(&mapping.short_code);
            UrlMappingResponse::from_mapping(mapping, short_url)
        })
        .collect();

    Ok(Json(ListResponse {
        count: items.len(),
        items,
    }))
}

/// Deletes a URL mapping. The short code stops resolving immediately.
///
/// # Endpoint
///
/// `DELETE /api/urls/{id}`
///
/// # Response
///
/// `200 OK` with the removed mapping, in the same shape as `GET /api/urls`
/// items.
///
/// # Errors
///
/// Returns 400 Bad Request if `id` is not an integer.
/// Returns 404 Not Found if no mapping has this id.
pub async fn delete_url_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UrlMappingResponse>, AppError> {
    let id: i64 = id
        .parse()
        .map_err(|_| AppError::bad_request("Invalid id", json!({ "id": id })))?;

    let mapping = state.link_service.delete_by_id(id).await?;
    let short_url = state.link_service.short_url(&mapping.short_code);

    Ok(Json(UrlMappingResponse::from_mapping(mapping, short_url)))
}
