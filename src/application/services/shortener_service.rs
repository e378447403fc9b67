//! Short code allocation and time-to-live expiration.

use std::sync::Arc;

use chrono::Duration;
use tracing::{debug, info, warn};

use crate::domain::clock::Clock;
use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::{ShortLinkRepository, StoreError};
use crate::utils::code_generator::{CodeGenerator, DEFAULT_CODE_LENGTH};

/// Default time-to-live: 24 hours.
pub const DEFAULT_TTL_MINUTES: u64 = 1440;

/// Default bound on code generation attempts per allocation.
pub const DEFAULT_MAX_ALLOCATION_ATTEMPTS: usize = 10;

/// Errors surfaced by [`ShortenerService`].
#[derive(Debug, thiserror::Error)]
pub enum ShortenError {
    /// The original URL was empty or whitespace only.
    #[error("original URL must not be empty")]
    InvalidInput,

    /// Every generated candidate collided with an existing code.
    #[error("failed to allocate a unique short code after {attempts} attempts")]
    AllocationExhausted { attempts: usize },

    /// A storage failure that was not a code collision.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Tunables for allocation and expiration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortenerSettings {
    /// Record lifetime in minutes. `0` disables expiration.
    pub ttl_minutes: u64,
    /// Number of symbols in generated codes.
    pub code_length: usize,
    /// Upper bound on generated candidates per allocation.
    pub max_allocation_attempts: usize,
}

impl ShortenerSettings {
    /// Returns the time-to-live as a duration; zero when expiration is disabled.
    pub fn ttl(&self) -> Duration {
        i64::try_from(self.ttl_minutes)
            .ok()
            .and_then(Duration::try_minutes)
            .unwrap_or(Duration::MAX)
    }

    /// Returns whether records ever expire.
    pub fn expiration_enabled(&self) -> bool {
        self.ttl_minutes > 0
    }
}

impl Default for ShortenerSettings {
    fn default() -> Self {
        Self {
            ttl_minutes: DEFAULT_TTL_MINUTES,
            code_length: DEFAULT_CODE_LENGTH,
            max_allocation_attempts: DEFAULT_MAX_ALLOCATION_ATTEMPTS,
        }
    }
}

/// Allocates short codes and enforces the time-to-live policy.
///
/// The service holds no state of its own beyond its collaborators: the
/// repository is the single source of truth for uniqueness and existence, so
/// any number of calls may run concurrently against the same repository.
///
/// Expiration is enforced two ways:
/// - lazily, by [`Self::resolve`] and [`Self::list_live`], which purge expired
///   records they come across before answering
/// - proactively, by [`Self::sweep_expired`], an operator-triggered bulk delete
pub struct ShortenerService<R: ShortLinkRepository + ?Sized> {
    repository: Arc<R>,
    generator: Arc<dyn CodeGenerator>,
    clock: Arc<dyn Clock>,
    settings: ShortenerSettings,
}

impl<R: ShortLinkRepository + ?Sized> ShortenerService<R> {
    /// Creates a new shortener service.
    pub fn new(
        repository: Arc<R>,
        generator: Arc<dyn CodeGenerator>,
        clock: Arc<dyn Clock>,
        settings: ShortenerSettings,
    ) -> Self {
        Self {
            repository,
            generator,
            clock,
            settings,
        }
    }

    /// Returns the settings this service was built with.
    pub fn settings(&self) -> &ShortenerSettings {
        &self.settings
    }

    /// Allocates a unique short code for `original_url` and stores the record.
    ///
    /// # Collision Handling
    ///
    /// Up to `max_allocation_attempts` candidates are generated. A candidate is
    /// discarded when the repository reports it as existing, or when `create`
    /// rejects it as a duplicate because a concurrent writer claimed it between
    /// the existence check and the insert.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::InvalidInput`] if `original_url` is blank.
    /// Returns [`ShortenError::AllocationExhausted`] if every candidate collided.
    /// Returns [`ShortenError::Storage`] on any other repository failure.
    pub async fn allocate(&self, original_url: &str) -> Result<ShortLink, ShortenError> {
        if original_url.trim().is_empty() {
            return Err(ShortenError::InvalidInput);
        }

        let attempts = self.settings.max_allocation_attempts;

        for attempt in 1..=attempts {
            let code = self.generator.generate(self.settings.code_length);

            if self.repository.exists(&code).await? {
                warn!(attempt, code = %code, "short code collision, retrying");
                continue;
            }

            let new_link = NewShortLink {
                original_url: original_url.to_string(),
                short_code: code,
            };

            match self.repository.create(new_link).await {
                Ok(link) => {
                    info!(id = link.id, short_code = %link.short_code, "short link created");
                    return Ok(link);
                }
                Err(StoreError::DuplicateCode(code)) => {
                    warn!(attempt, code = %code, "short code claimed concurrently, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }

        warn!(attempts, "short code allocation exhausted");
        Err(ShortenError::AllocationExhausted { attempts })
    }

    /// Resolves a short code to its live record.
    ///
    /// An expired record is deleted before `None` is returned, so it is gone
    /// from storage as soon as anyone asks for it.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::Storage`] if the lookup or the purge fails.
    pub async fn resolve(&self, code: &str) -> Result<Option<ShortLink>, ShortenError> {
        let Some(link) = self.repository.find_by_code(code).await? else {
            debug!(code, "short code not found");
            return Ok(None);
        };

        if link.is_expired_at(self.clock.now(), self.settings.ttl()) {
            self.purge(&link).await?;
            return Ok(None);
        }

        Ok(Some(link))
    }

    /// Lists every live record, purging expired ones along the way.
    ///
    /// Expired records are deleted one at a time rather than in bulk. Live
    /// records keep the order the repository returned them in.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::Storage`] if listing or any purge fails.
    pub async fn list_live(&self) -> Result<Vec<ShortLink>, ShortenError> {
        let links = self.repository.list_all().await?;
        let now = self.clock.now();
        let ttl = self.settings.ttl();

        let mut live = Vec::with_capacity(links.len());
        for link in links {
            if link.is_expired_at(now, ttl) {
                self.purge(&link).await?;
            } else {
                live.push(link);
            }
        }

        Ok(live)
    }

    /// Deletes a record by short code.
    ///
    /// Operates on raw presence: a record that is expired but not yet purged
    /// still reports `true`.
    pub async fn remove(&self, code: &str) -> Result<bool, ShortenError> {
        let deleted = self.repository.delete_by_code(code).await?;
        if deleted {
            info!(code, "short link deleted");
        }
        Ok(deleted)
    }

    /// Deletes every record older than the time-to-live.
    ///
    /// Returns `0` without touching storage when expiration is disabled.
    pub async fn sweep_expired(&self) -> Result<u64, ShortenError> {
        if !self.settings.expiration_enabled() {
            debug!("expiration disabled, skipping sweep");
            return Ok(0);
        }

        let Some(cutoff) = self.clock.now().checked_sub_signed(self.settings.ttl()) else {
            return Ok(0);
        };

        let removed = self.repository.delete_created_before(cutoff).await?;
        info!(removed, %cutoff, "expired short links swept");

        Ok(removed)
    }

    /// Checks that the repository is reachable.
    pub async fn check_storage(&self) -> Result<(), ShortenError> {
        self.repository.ping().await?;
        Ok(())
    }

    async fn purge(&self, link: &ShortLink) -> Result<(), ShortenError> {
        warn!(
            short_code = %link.short_code,
            created_at = %link.created_at,
            "purging expired short link"
        );
        self.repository.delete_by_code(&link.short_code).await?;
        Ok(())
    }
}
