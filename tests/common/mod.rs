#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;
use url_ttl_shortener::api;
use url_ttl_shortener::application::services::{ShortenerService, ShortenerSettings};
use url_ttl_shortener::domain::clock::ManualClock;
use url_ttl_shortener::domain::repositories::ShortLinkRepository;
use url_ttl_shortener::infrastructure::persistence::MemoryShortLinkRepository;
use url_ttl_shortener::state::{AppState, DynShortenerService};
use url_ttl_shortener::utils::code_generator::RandomCodeGenerator;

pub const BASE_URL: &str = "http://sho.rt";

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 12, 12, 0, 20, 0).unwrap()
}

/// Service over in-memory storage plus handles to drive it from tests.
pub struct TestContext {
    pub clock: Arc<ManualClock>,
    pub repository: Arc<MemoryShortLinkRepository>,
    pub shortener: Arc<DynShortenerService>,
}

pub fn create_test_context(ttl_minutes: u64) -> TestContext {
    let clock = Arc::new(ManualClock::new(t0()));
    let repository = Arc::new(MemoryShortLinkRepository::new(clock.clone()));
    let dyn_repository: Arc<dyn ShortLinkRepository> = repository.clone();

    let shortener = Arc::new(ShortenerService::new(
        dyn_repository,
        Arc::new(RandomCodeGenerator),
        clock.clone(),
        ShortenerSettings {
            ttl_minutes,
            ..ShortenerSettings::default()
        },
    ));

    TestContext {
        clock,
        repository,
        shortener,
    }
}

pub fn create_test_state(ctx: &TestContext) -> AppState {
    AppState::new(ctx.shortener.clone(), BASE_URL)
}

pub fn create_test_app(ctx: &TestContext) -> Router {
    api::routes::routes().with_state(create_test_state(ctx))
}

pub fn create_test_server(ctx: &TestContext) -> TestServer {
    TestServer::new(create_test_app(ctx)).unwrap()
}
