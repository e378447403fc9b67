//! In-process implementation of the short link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::clock::Clock;
use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::{ShortLinkRepository, StoreError, StoreResult};

#[derive(Default)]
struct MemoryState {
    last_id: i64,
    links: HashMap<String, ShortLink>,
}

/// Short link storage held in process memory.
///
/// Selected with `STORAGE_BACKEND=memory`. Records are lost on restart.
/// `created_at` is taken from the injected [`Clock`], which lets tests age
/// records without waiting. Uniqueness is checked and the record inserted
/// under a single write lock, so concurrent `create` calls for the same code
/// yield exactly one success and [`StoreError::DuplicateCode`] for the rest.
pub struct MemoryShortLinkRepository {
    clock: Arc<dyn Clock>,
    state: RwLock<MemoryState>,
}

impl MemoryShortLinkRepository {
    /// Creates an empty repository stamping records with `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            state: RwLock::new(MemoryState::default()),
        }
    }
}

#[async_trait]
impl ShortLinkRepository for MemoryShortLinkRepository {
    async fn create(&self, new_link: NewShortLink) -> StoreResult<ShortLink> {
        let mut state = self.state.write().await;

        if state.links.contains_key(&new_link.short_code) {
            return Err(StoreError::DuplicateCode(new_link.short_code));
        }

        state.last_id += 1;
        let link = ShortLink::new(
            state.last_id,
            new_link.original_url,
            new_link.short_code,
            self.clock.now(),
        );
        state.links.insert(link.short_code.clone(), link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> StoreResult<Option<ShortLink>> {
        Ok(self.state.read().await.links.get(code).cloned())
    }

    async fn exists(&self, code: &str) -> StoreResult<bool> {
        Ok(self.state.read().await.links.contains_key(code))
    }

    async fn list_all(&self) -> StoreResult<Vec<ShortLink>> {
        let mut links: Vec<ShortLink> = self.state.read().await.links.values().cloned().collect();
        links.sort_by_key(|link| (link.created_at, link.id));
        Ok(links)
    }

    async fn delete_by_code(&self, code: &str) -> StoreResult<bool> {
        Ok(self.state.write().await.links.remove(code).is_some())
    }

    async fn delete_created_before(&self, cutoff: DateTime<Utc>) -> StoreResult<u64> {
        let mut state = self.state.write().await;
        let before = state.links.len();
        state.links.retain(|_, link| link.created_at >= cutoff);
        Ok((before - state.links.len()) as u64)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::ManualClock;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 12, 12, 0, 20, 0).unwrap()
    }

    fn new_link(code: &str) -> NewShortLink {
        NewShortLink {
            original_url: format!("https://example.com/{code}"),
            short_code: code.to_string(),
        }
    }

    fn repo_with_clock() -> (MemoryShortLinkRepository, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(t0()));
        (MemoryShortLinkRepository::new(clock.clone()), clock)
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamp() {
        let (repo, clock) = repo_with_clock();

        let first = repo.create(new_link("aaa111")).await.unwrap();
        clock.advance(Duration::seconds(5));
        let second = repo.create(new_link("bbb222")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.created_at, t0());
        assert_eq!(second.created_at, t0() + Duration::seconds(5));
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_code() {
        let (repo, _) = repo_with_clock();

        repo.create(new_link("dup001")).await.unwrap();
        let result = repo.create(new_link("dup001")).await;

        assert!(matches!(result, Err(StoreError::DuplicateCode(code)) if code == "dup001"));
    }

    #[tokio::test]
    async fn test_find_and_exists() {
        let (repo, _) = repo_with_clock();
        repo.create(new_link("abc123")).await.unwrap();

        assert!(repo.exists("abc123").await.unwrap());
        assert!(!repo.exists("ABC123").await.unwrap());

        let found = repo.find_by_code("abc123").await.unwrap().unwrap();
        assert_eq!(found.original_url, "https://example.com/abc123");
        assert!(repo.find_by_code("zzz999").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_by_code_is_idempotent() {
        let (repo, _) = repo_with_clock();
        repo.create(new_link("del001")).await.unwrap();

        assert!(repo.delete_by_code("del001").await.unwrap());
        assert!(!repo.delete_by_code("del001").await.unwrap());
    }

    #[tokio::test]
    async fn test_list_all_oldest_first() {
        let (repo, clock) = repo_with_clock();

        for code in ["first1", "secnd2", "third3"] {
            repo.create(new_link(code)).await.unwrap();
            clock.advance(Duration::seconds(1));
        }

        let codes: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.short_code)
            .collect();
        assert_eq!(codes, vec!["first1", "secnd2", "third3"]);
    }

    #[tokio::test]
    async fn test_delete_created_before_is_strict() {
        let (repo, clock) = repo_with_clock();

        repo.create(new_link("old001")).await.unwrap();
        clock.advance(Duration::minutes(1));
        repo.create(new_link("edge01")).await.unwrap();
        clock.advance(Duration::minutes(1));
        repo.create(new_link("new001")).await.unwrap();

        let removed = repo
            .delete_created_before(t0() + Duration::minutes(1))
            .await
            .unwrap();

        assert_eq!(removed, 1);
        assert!(!repo.exists("old001").await.unwrap());
        assert!(repo.exists("edge01").await.unwrap());
        assert!(repo.exists("new001").await.unwrap());
    }

    #[tokio::test]
    async fn test_concurrent_create_same_code_single_winner() {
        let (repo, _) = repo_with_clock();
        let repo = Arc::new(repo);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.create(new_link("race01")).await })
            })
            .collect();

        let mut successes = 0;
        let mut duplicates = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => successes += 1,
                Err(StoreError::DuplicateCode(_)) => duplicates += 1,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(duplicates, 7);
    }
}
