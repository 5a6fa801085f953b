//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::links::UrlMappingResponse;
use crate::api::dto::shorten::ShortenRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "example.com/some/page" }
/// ```
///
/// URLs without an `http://` or `https://` prefix get `https://` prepended.
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "id": 1,
///   "original_url": "https://example.com/some/page",
///   "short_url": "http://localhost:3000/aB3xY9",
///   "short_code": "aB3xY9",
///   "click_count": 0,
///   "created_at": "2025-01-01T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON, `url` is not a string,
/// or the URL is missing or invalid.
/// Returns 500 Internal Server Error if no free code was found or storage fails.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UrlMappingResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let link = state.link_service.shorten(&payload.url).await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}
