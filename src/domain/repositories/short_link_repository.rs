//! Repository trait for short link data access.

use crate::domain::entities::{NewShortLink, ShortLink};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Errors raised by a [`ShortLinkRepository`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The short code is already taken by another record.
    ///
    /// Raised by the storage-level uniqueness constraint; the allocation loop
    /// treats it as a collision and retries with a fresh code.
    #[error("short code '{0}' already exists")]
    DuplicateCode(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type for repository operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Repository interface for short link records.
///
/// The repository is the single source of truth for uniqueness and existence.
/// It applies no expiration filtering of its own; TTL policy belongs to
/// [`crate::application::services::ShortenerService`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryShortLinkRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortLinkRepository: Send + Sync {
    /// Persists a new record with a storage-assigned `id` and `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateCode`] if the short code is already stored.
    /// Returns [`StoreError::Database`] on any other persistence failure.
    async fn create(&self, new_link: NewShortLink) -> StoreResult<ShortLink>;

    /// Finds a record by exact short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortLink))` if found, expired or not
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, code: &str) -> StoreResult<Option<ShortLink>>;

    /// Checks whether a short code is already stored.
    async fn exists(&self, code: &str) -> StoreResult<bool>;

    /// Returns every stored record, oldest first.
    async fn list_all(&self) -> StoreResult<Vec<ShortLink>>;

    /// Deletes a record by short code.
    ///
    /// Returns `Ok(true)` if a record was removed, `Ok(false)` if none existed.
    async fn delete_by_code(&self, code: &str) -> StoreResult<bool>;

    /// Deletes every record with `created_at < cutoff` and returns how many
    /// were removed.
    async fn delete_created_before(&self, cutoff: DateTime<Utc>) -> StoreResult<u64>;

    /// Verifies that the storage backend is reachable.
    async fn ping(&self) -> StoreResult<()>;
}
