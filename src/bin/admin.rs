//! CLI administration tool for tinylink.
//!
//! Manages short links and inspects the database without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all links, newest first
//! cargo run --bin admin -- links list
//!
//! # Shorten a URL
//! cargo run --bin admin -- links shorten example.com/some/page
//!
//! # Delete a link by id
//! cargo run --bin admin -- links delete 42
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*` components (required)
//! - `BASE_URL`: origin used to print short URLs (default: `http://localhost:3000`)

use tinylink::application::services::LinkService;
use tinylink::config::{Config, mask_connection_string};
use tinylink::domain::errors::DeleteError;
use tinylink::infrastructure::persistence::PgLinkRepository;
use tinylink::server::{connect_pool, run_migrations};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

type PgLinkService = LinkService<PgLinkRepository>;

/// CLI tool for managing tinylink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage short links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List all links, newest first
    List,

    /// Create a short link
    Shorten {
        /// URL to shorten (`https://` is added when no scheme is given)
        url: String,
    },

    /// Delete a link by id
    Delete {
        /// Mapping id as shown by `links list`
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if config.database_url.is_none() {
        config.database_url =
            Some(Config::load_database_url().context("Failed to load database configuration")?);
    }

    let pool = connect_pool(&config).await?;

    let result = match cli.command {
        Commands::Links { action } => handle_link_action(action, &pool, &config).await,
        Commands::Stats => handle_stats(&pool).await,
        Commands::Db { action } => handle_db_action(action, &pool, &config).await,
    };

    pool.close().await;

    result
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, pool: &PgPool, config: &Config) -> Result<()> {
    run_migrations(pool).await?;

    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));
    let service = LinkService::new(repo, config.base_url.clone());

    match action {
        LinkAction::List => list_links(&service).await,
        LinkAction::Shorten { url } => shorten_link(&service, &url).await,
        LinkAction::Delete { id, yes } => delete_link(&service, id, yes).await,
    }
}

/// Lists all links.
///
/// # Output Format
///
/// ```text
/// 📋 Links
///
///   ID     Code     Clicks   Created            URL
///   ─────────────────────────────────────────────────────────────────────────────
///   2      aB3xY9   12       2025-01-16 14:20   https://example.com/page
///   1      Zz9Zz9   0        2025-01-15 10:30   https://example.org
/// ```
async fn list_links(service: &PgLinkService) -> Result<()> {
    println!("{}", "📋 Links".bright_blue().bold());
    println!();

    let mappings = service.list_all().await.context("Failed to list links")?;

    if mappings.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} admin links shorten <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<6} {:<8} {:<8} {:<18} {}",
        "ID".bright_white().bold(),
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(79).bright_black());

    for mapping in &mappings {
        println!(
            "  {:<6} {:<8} {:<8} {:<18} {}",
            mapping.id.to_string().bright_black(),
            mapping.short_code.cyan(),
            mapping.click_count.to_string().green(),
            mapping
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            mapping.original_url
        );
    }

    println!();
    println!(
        "  Total: {}",
        mappings.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Creates a short link and prints its public URL.
async fn shorten_link(service: &PgLinkService, url: &str) -> Result<()> {
    println!("{}", "✂️  Shorten URL".bright_blue().bold());
    println!();

    let link = service
        .shorten(url)
        .await
        .context("Failed to shorten URL")?;

    println!("  URL:       {}", link.mapping.original_url.bright_white());
    println!("  Code:      {}", link.mapping.short_code.cyan());
    println!("  Short URL: {}", link.short_url.bright_yellow().bold());
    println!();
    println!("{}", "✅ Link created successfully!".green().bold());
    println!();

    Ok(())
}

/// Deletes a link after confirmation.
///
/// # Safety
///
/// - Requires confirmation (default: No) unless `--yes` is given
/// - The short code may be handed out again afterwards
async fn delete_link(service: &PgLinkService, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Link".bright_blue().bold());
    println!();

    let mapping = match service.find_by_id(id).await {
        Ok(mapping) => mapping,
        Err(DeleteError::NotFound(_)) => {
            println!("{}", format!("⚠️  No link with id {id}").yellow());
            return Ok(());
        }
        Err(e) => return Err(e).context("Failed to look up link"),
    };

    println!("  Code:   {}", mapping.short_code.cyan());
    println!("  URL:    {}", mapping.original_url.bright_white());
    println!("  Clicks: {}", mapping.click_count.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_by_id(id)
        .await
        .context("Failed to delete link")?;

    println!();
    println!("{}", "✅ Link deleted successfully!".green().bold());
    println!();

    Ok(())
}

/// Displays link and click totals.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let (links_count, clicks_count): (i64, i64) = sqlx::query_as(
        "SELECT COUNT(*), COALESCE(SUM(click_count), 0)::BIGINT FROM url_mappings",
    )
    .fetch_one(pool)
    .await
    .context("Failed to query statistics")?;

    println!(
        "  Links:  {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Clicks: {}",
        clicks_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, config: &Config) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let applied: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM _sqlx_migrations WHERE success",
            )
            .fetch_one(pool)
            .await
            .unwrap_or(0);

            if let Some(ref url) = config.database_url {
                println!("  Database:   {}", mask_connection_string(url).bright_white());
            }
            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", applied.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
