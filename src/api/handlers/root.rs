//! Handler for the service root.

use axum::Json;
use serde::Serialize;

/// Welcome payload returned by `GET /`.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub version: &'static str,
}

/// Identifies the service.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        status: "success",
        message: "Welcome to URL Shortener API",
        version: env!("CARGO_PKG_VERSION"),
    })
}
