//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}` and `GET /api/{code}`
///
/// # Request Flow
///
/// 1. Reject codes that are not 6 alphanumerics without touching storage
/// 2. Look up the mapping
/// 3. Atomically increment its click count (best-effort)
/// 4. Return 308 Permanent Redirect
///
/// # Errors
///
/// Returns 404 Not Found for unknown and malformed codes alike.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state.link_service.resolve_and_count(&code).await?;

    debug!(code = %code, "Redirecting");

    Ok(Redirect::permanent(&original_url))
}
