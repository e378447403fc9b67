//! Handlers for short link management endpoints (create, list, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::{ApiResponse, CreateShortLinkRequest, ShortLinkData};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /urls`
///
/// # Request Body
///
/// ```json
/// { "original_url": "https://example.com/path" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "status": "success",
///   "message": "Short URL created successfully",
///   "data": {
///     "id": 1,
///     "original_url": "https://example.com/path",
///     "short_code": "aB3xY9",
///     "short_url": "http://localhost:8000/u/aB3xY9",
///     "created_at": "2025-12-12T00:20:00Z"
///   }
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is missing or not HTTP(S).
/// Returns 503 Service Unavailable if no unique code could be allocated.
pub async fn create_short_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateShortLinkRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ShortLinkData>>), AppError> {
    payload.validate()?;

    let link = state.shortener.allocate(&payload.original_url).await?;
    let short_url = state.short_url(&link.short_code);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Short URL created successfully",
            ShortLinkData::from_link(link, short_url),
        )),
    ))
}

/// Lists all live short links.
///
/// # Endpoint
///
/// `GET /urls`
///
/// Expired links are never returned; any found while listing are deleted.
pub async fn list_short_links_handler(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ShortLinkData>>>, AppError> {
    let links = state.shortener.list_live().await?;

    let data: Vec<ShortLinkData> = links
        .into_iter()
        .map(|link| {
            let short_url = state.short_url(&link.short_code);
            ShortLinkData::from_link(link, short_url)
        })
        .collect();

    Ok(Json(ApiResponse::success(
        format!("Retrieved {} URL(s)", data.len()),
        data,
    )))
}

/// Deletes a short link.
///
/// # Endpoint
///
/// `DELETE /urls/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if no record with this code is stored.
pub async fn delete_short_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    if !state.shortener.remove(&code).await? {
        return Err(AppError::not_found(
            format!("URL not found - Short code '{code}' does not exist"),
            json!({ "code": code }),
        ));
    }

    Ok(Json(ApiResponse::message(format!(
        "URL with short code '{code}' deleted successfully"
    ))))
}
