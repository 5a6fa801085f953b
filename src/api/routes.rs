//! API route configuration.

use crate::api::handlers::{
    delete_url_handler, list_urls_handler, redirect_handler, shorten_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All routes served under `/api`.
///
/// # Endpoints
///
/// - `POST   /shorten`     - Create a short link
/// - `GET    /urls`        - List all mappings, newest first
/// - `DELETE /urls/{id}`   - Delete a mapping
/// - `GET    /{code}`      - Redirect, same as the root-level route
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/urls", get(list_urls_handler))
        .route("/urls/{id}", delete(delete_url_handler))
        .route("/{code}", get(redirect_handler))
}
