//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /u/{code}`
///
/// # Request Flow
///
/// 1. Resolve the code through the shortener service
/// 2. An expired link is purged and treated as missing
/// 3. Return 302 Found with the original URL in `Location`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist or has expired.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.shortener.resolve(&code).await?.ok_or_else(|| {
        AppError::not_found(
            "URL not found - The short code does not exist or has expired",
            json!({ "code": code }),
        )
    })?;

    debug!(code = %link.short_code, "redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, link.original_url)]))
}
