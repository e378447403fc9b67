//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::domain::repositories::ShortLinkRepository;

/// Shortener service over whichever storage backend is configured.
pub type DynShortenerService = ShortenerService<dyn ShortLinkRepository>;

#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<DynShortenerService>,
    /// Public prefix for generated short URLs, e.g. `https://s.example.com`.
    pub base_url: String,
}

impl AppState {
    pub fn new(shortener: Arc<DynShortenerService>, base_url: impl Into<String>) -> Self {
        Self {
            shortener,
            base_url: base_url.into(),
        }
    }

    /// Builds the public short URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/u/{}", self.base_url.trim_end_matches('/'), code)
    }
}
