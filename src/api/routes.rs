//! API route configuration.

use crate::api::handlers::{
    create_short_link_handler, delete_short_link_handler, health_handler,
    list_short_links_handler, redirect_handler, root_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

/// All public routes.
///
/// # Endpoints
///
/// - `GET    /`             - Service identification
/// - `GET    /health`       - Storage health check
/// - `POST   /urls`         - Create a short link
/// - `GET    /urls`         - List live short links
/// - `DELETE /urls/{code}`  - Delete a short link
/// - `GET    /u/{code}`     - Redirect to the original URL
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route(
            "/urls",
            get(list_short_links_handler).post(create_short_link_handler),
        )
        .route("/urls/{code}", delete(delete_short_link_handler))
        .route("/u/{code}", get(redirect_handler))
}
