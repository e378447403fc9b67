//! CLI administration tool for url-ttl-shortener.
//!
//! Provides maintenance commands that run against the same storage as the
//! HTTP service, without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Delete every expired short link
//! cargo run --bin admin -- cleanup-expired
//!
//! # Same, without the confirmation prompt (cron, CI)
//! cargo run --bin admin -- cleanup-expired --yes
//!
//! # List live short links
//! cargo run --bin admin -- list
//!
//! # Delete one short link
//! cargo run --bin admin -- delete aB3xY9
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Reads the same variables as the server (see `config` module). The
//! in-memory backend is rejected, since it would only ever see an empty store.

use url_ttl_shortener::config::{self, Config, StorageBackend};
use url_ttl_shortener::server::build_shortener;
use url_ttl_shortener::state::DynShortenerService;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;

/// CLI tool for managing url-ttl-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Delete every short link older than APP_TTL_MINUTES
    CleanupExpired {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List live short links
    List,

    /// Delete a short link
    Delete {
        /// Short code to delete
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    if config.storage_backend != StorageBackend::Postgres {
        anyhow::bail!(
            "admin commands require STORAGE_BACKEND=postgres, got '{}'",
            config.storage_backend
        );
    }

    let (shortener, pool) = build_shortener(&config).await?;
    let pool = pool.context("PostgreSQL pool was not initialized")?;

    match cli.command {
        Commands::CleanupExpired { yes } => cleanup_expired(&shortener, yes).await?,
        Commands::List => list_links(&shortener, &config).await?,
        Commands::Delete { code, yes } => delete_link(&shortener, &code, yes).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Bulk-deletes every record older than the configured time-to-live.
///
/// With `APP_TTL_MINUTES=0` nothing ever expires and nothing is deleted.
async fn cleanup_expired(shortener: &DynShortenerService, skip_confirm: bool) -> Result<()> {
    println!("{}", "🧹 Cleanup expired short links".bright_blue().bold());
    println!();

    let settings = shortener.settings();
    if !settings.expiration_enabled() {
        println!(
            "{}",
            "  Expiration is disabled (APP_TTL_MINUTES=0), nothing to do".yellow()
        );
        return Ok(());
    }

    println!(
        "  TTL: {} minute(s)",
        settings.ttl_minutes.to_string().cyan()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete all expired short links?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let removed = shortener
        .sweep_expired()
        .await
        .map_err(|e| anyhow::anyhow!("Cleanup failed: {}", e))?;

    println!();
    println!(
        "{} {}",
        "✅ Expired short links deleted:".green().bold(),
        removed.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Lists live short links, oldest first.
///
/// # Output Format
///
/// ```text
/// 📋 Short Links
///
///   ID    Code       Created              URL
///   ──────────────────────────────────────────────────────────────
///   1     aB3xY9     2025-12-12 00:20     https://example.com/path
/// ```
async fn list_links(shortener: &DynShortenerService, config: &Config) -> Result<()> {
    println!("{}", "📋 Short Links".bright_blue().bold());
    println!();

    let links = shortener
        .list_live()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list short links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No short links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<10} {:<20} {}",
        "ID".bright_white().bold(),
        "Code".bright_white().bold(),
        "Created".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<5} {:<10} {:<20} {}",
            link.id.to_string().bright_black(),
            link.short_code.cyan(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.original_url
        );
    }

    println!();
    println!(
        "  Total: {}   Base URL: {}",
        links.len().to_string().bright_white().bold(),
        config.base_url.bright_black()
    );
    println!();

    Ok(())
}

/// Deletes a short link by code with confirmation prompt.
async fn delete_link(shortener: &DynShortenerService, code: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete short link".bright_blue().bold());
    println!();
    println!("  Code: {}", code.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this short link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let deleted = shortener
        .remove(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete short link: {}", e))?;

    if deleted {
        println!("{}", "✅ Short link deleted".green().bold());
    } else {
        println!("{}", "⚠️  Short link not found".yellow());
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  PostgreSQL: {}", version.bright_white());
        }
    }

    Ok(())
}
