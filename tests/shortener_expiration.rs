mod common;

use chrono::Duration;
use url_ttl_shortener::domain::repositories::ShortLinkRepository;

#[tokio::test]
async fn test_allocate_and_resolve_round_trip() {
    let ctx = common::create_test_context(1440);

    let link = ctx
        .shortener
        .allocate("https://example.com/a")
        .await
        .unwrap();
    let resolved = ctx.shortener.resolve(&link.short_code).await.unwrap();

    assert_eq!(resolved, Some(link));
}

#[tokio::test]
async fn test_same_url_gets_distinct_codes() {
    let ctx = common::create_test_context(1440);

    let first = ctx
        .shortener
        .allocate("https://example.com/same")
        .await
        .unwrap();
    let second = ctx
        .shortener
        .allocate("https://example.com/same")
        .await
        .unwrap();

    assert_ne!(first.short_code, second.short_code);
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_concurrent_allocations_are_unique() {
    let ctx = common::create_test_context(1440);

    let handles: Vec<_> = (0..50)
        .map(|i| {
            let shortener = ctx.shortener.clone();
            tokio::spawn(async move {
                shortener
                    .allocate(&format!("https://example.com/{i}"))
                    .await
            })
        })
        .collect();

    let mut codes = std::collections::HashSet::new();
    for handle in handles {
        let link = handle.await.unwrap().unwrap();
        assert!(codes.insert(link.short_code));
    }

    assert_eq!(ctx.repository.list_all().await.unwrap().len(), 50);
}

#[tokio::test]
async fn test_resolve_purges_expired_record() {
    let ctx = common::create_test_context(1);

    let link = ctx
        .shortener
        .allocate("https://example.com/old")
        .await
        .unwrap();
    ctx.clock.advance(Duration::seconds(61));

    assert!(ctx.repository.exists(&link.short_code).await.unwrap());
    assert!(ctx.shortener.resolve(&link.short_code).await.unwrap().is_none());
    assert!(!ctx.repository.exists(&link.short_code).await.unwrap());
}

#[tokio::test]
async fn test_record_exactly_at_ttl_is_live() {
    let ctx = common::create_test_context(1);

    let link = ctx
        .shortener
        .allocate("https://example.com/edge")
        .await
        .unwrap();
    ctx.clock.advance(Duration::minutes(1));

    assert!(ctx.shortener.resolve(&link.short_code).await.unwrap().is_some());
}

#[tokio::test]
async fn test_list_live_purges_every_expired_record() {
    let ctx = common::create_test_context(10);

    for i in 0..3 {
        ctx.shortener
            .allocate(&format!("https://example.com/old/{i}"))
            .await
            .unwrap();
    }
    ctx.clock.advance(Duration::minutes(8));
    let fresh = ctx
        .shortener
        .allocate("https://example.com/fresh")
        .await
        .unwrap();
    ctx.clock.advance(Duration::minutes(5));

    let live = ctx.shortener.list_live().await.unwrap();

    assert_eq!(live, vec![fresh]);
    assert_eq!(ctx.repository.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_sweep_expired_deletes_only_old_records() {
    let ctx = common::create_test_context(60);

    let old = ctx
        .shortener
        .allocate("https://example.com/old")
        .await
        .unwrap();
    ctx.clock.advance(Duration::minutes(30));
    let young = ctx
        .shortener
        .allocate("https://example.com/young")
        .await
        .unwrap();
    ctx.clock.advance(Duration::minutes(31));

    let removed = ctx.shortener.sweep_expired().await.unwrap();

    assert_eq!(removed, 1);
    assert!(!ctx.repository.exists(&old.short_code).await.unwrap());
    assert!(ctx.repository.exists(&young.short_code).await.unwrap());
}

#[tokio::test]
async fn test_sweep_is_noop_when_ttl_disabled() {
    let ctx = common::create_test_context(0);

    ctx.shortener
        .allocate("https://example.com/keep")
        .await
        .unwrap();
    ctx.clock.advance(Duration::days(365));

    assert_eq!(ctx.shortener.sweep_expired().await.unwrap(), 0);
    assert_eq!(ctx.shortener.list_live().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_remove_is_idempotent() {
    let ctx = common::create_test_context(1440);

    let link = ctx
        .shortener
        .allocate("https://example.com/gone")
        .await
        .unwrap();

    assert!(ctx.shortener.remove(&link.short_code).await.unwrap());
    assert!(!ctx.shortener.remove(&link.short_code).await.unwrap());
    assert!(ctx.shortener.resolve(&link.short_code).await.unwrap().is_none());
}
