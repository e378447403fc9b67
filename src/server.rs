//! HTTP server initialization and runtime setup.
//!
//! Handles logging, storage selection, database connections and the Axum
//! server lifecycle.

use crate::config::{Config, StorageBackend};
use crate::domain::clock::{Clock, SystemClock};
use crate::domain::repositories::ShortLinkRepository;
use crate::infrastructure::persistence::{MemoryShortLinkRepository, PgShortLinkRepository};
use crate::routes::app_router;
use crate::state::{AppState, DynShortenerService};
use crate::utils::code_generator::RandomCodeGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `config.log_level`. `LOG_FORMAT=json`
/// switches to one JSON object per line.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Connects to PostgreSQL with the configured pool settings.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is required for the postgres storage backend")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;

    Ok(pool)
}

/// Builds the shortener service over the configured storage backend.
///
/// For PostgreSQL, connects and applies pending migrations; the pool is
/// returned alongside the service for callers that need direct access.
///
/// # Errors
///
/// Returns an error if the database is unreachable or a migration fails.
pub async fn build_shortener(
    config: &Config,
) -> Result<(Arc<DynShortenerService>, Option<PgPool>)> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let (repository, pool): (Arc<dyn ShortLinkRepository>, Option<PgPool>) =
        match config.storage_backend {
            StorageBackend::Postgres => {
                let pool = connect_pool(config).await?;
                tracing::info!("Connected to database");

                sqlx::migrate!("./migrations")
                    .run(&pool)
                    .await
                    .context("Failed to migrate")?;

                (
                    Arc::new(PgShortLinkRepository::new(Arc::new(pool.clone()))),
                    Some(pool),
                )
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage, records are lost on restart");
                (Arc::new(MemoryShortLinkRepository::new(clock.clone())), None)
            }
        };

    let shortener = DynShortenerService::new(
        repository,
        Arc::new(RandomCodeGenerator),
        clock,
        config.shortener_settings(),
    );

    Ok((Arc::new(shortener), pool))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Storage backend (PostgreSQL pool and migrations, or in-memory)
/// - Shortener service
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let (shortener, _pool) = build_shortener(&config).await?;

    let state = AppState::new(shortener, config.base_url.clone());

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
