//! Short link entity representing a shortened URL mapping.

use chrono::{DateTime, Duration, Utc};

/// A shortened URL with its creation metadata.
///
/// Records are immutable once stored: there is no update path, only
/// creation and deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            created_at,
        }
    }

    /// Returns true if the link is past its time-to-live at `now`.
    ///
    /// A link is expired strictly after `created_at + ttl`; at exactly the
    /// boundary it is still live. A zero `ttl` disables expiration.
    pub fn is_expired_at(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        if ttl.is_zero() {
            return false;
        }

        match self.created_at.checked_add_signed(ttl) {
            Some(deadline) => now > deadline,
            None => false,
        }
    }
}

/// Input data for creating a new short link.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub original_url: String,
    pub short_code: String,
}
