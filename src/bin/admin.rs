//! CLI administration tool for snaplink.
//!
//! Performs maintenance and link operations directly against the database,
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Purge expired links now
//! cargo run --bin admin -- cleanup
//!
//! # Inspect a link
//! cargo run --bin admin -- link show promo
//!
//! # Create a link that expires in one hour
//! cargo run --bin admin -- link create https://example.com --alias promo --expires-in 3600
//!
//! # Check database connection and migrations
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` / `DB_PATH`, `BASE_URL`, `CODE_LENGTH`.

use snaplink::application::services::{LinkService, build_short_url};
use snaplink::config::{self, Config};
use snaplink::domain::entities::ShortenInput;
use snaplink::infrastructure::persistence::{
    MIGRATOR, SqliteLinkRepository, connect, connect_and_migrate,
};
use snaplink::utils::code_generator::RandomCodeGenerator;

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
use std::collections::HashSet;
use std::sync::Arc;

type CliLinkService = LinkService<SqliteLinkRepository, RandomCodeGenerator>;

/// CLI tool for managing snaplink.
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
    /// Purge expired links
    Cleanup {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Inspect or create links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Show link metadata
    Show {
        /// Short code or alias
        code: String,
    },

    /// Create a short link
    Create {
        /// Destination URL
        url: String,

        /// Custom alias (3-64 chars of A-Z, a-z, 0-9, '_' and '-')
        #[arg(short, long)]
        alias: Option<String>,

        /// Expire the link this many seconds from now
        #[arg(short, long, value_name = "SECONDS")]
        expires_in: Option<u32>,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and migration status
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Cleanup { yes } => handle_cleanup(&config, yes).await?,
        Commands::Link { action } => handle_link_action(&config, action).await?,
        Commands::Db { action } => handle_db_action(&config, action).await?,
    }

    Ok(())
}

/// Connects, migrates and wires a [`LinkService`] the way the server does.
async fn link_service(config: &Config) -> Result<CliLinkService> {
    let pool = connect_and_migrate(&config.database_url, config.db_max_connections)
        .await
        .context("Failed to connect to database")?;

    let repository = Arc::new(SqliteLinkRepository::new(Arc::new(pool)));
    let generator = Arc::new(RandomCodeGenerator::new(config.code_length));

    Ok(LinkService::new(repository, generator))
}

/// Purges every link whose expiry is at or before now.
///
/// Requires confirmation (default: No) unless `--yes` is given.
async fn handle_cleanup(config: &Config, skip_confirm: bool) -> Result<()> {
    println!("{}", "🧹 Purge expired links".bright_blue().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Permanently delete all expired links?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let service = link_service(config).await?;
    let purged = service
        .cleanup_expired(Utc::now())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to purge expired links: {}", e))?;

    println!(
        "{} {}",
        "✅ Purged:".green().bold(),
        purged.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Dispatches link commands.
async fn handle_link_action(config: &Config, action: LinkAction) -> Result<()> {
    let service = link_service(config).await?;

    match action {
        LinkAction::Show { code } => show_link(&service, &config.base_url, &code).await?,
        LinkAction::Create {
            url,
            alias,
            expires_in,
        } => create_link(&service, &config.base_url, url, alias, expires_in).await?,
    }

    Ok(())
}

/// Prints link metadata.
///
/// # Output Format
///
/// ```text
///   Code:       promo
///   Short URL:  http://localhost:8080/promo
///   URL:        https://example.com/
///   Created:    2024-06-01 12:00:00 UTC
///   Expires:    never
///   Hits:       42
///   Status:     ACTIVE
/// ```
async fn show_link(service: &CliLinkService, base_url: &str, code: &str) -> Result<()> {
    let metadata = service
        .metadata(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    let link = &metadata.link;

    let expires = link
        .expires_at
        .map(|e| e.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "never".to_string());

    let status = if metadata.expired {
        "EXPIRED".red()
    } else {
        "ACTIVE".green()
    };

    println!("  Code:       {}", link.code.cyan());
    println!(
        "  Short URL:  {}",
        build_short_url(base_url, &link.code).bright_yellow()
    );
    println!("  URL:        {}", link.long_url);
    println!(
        "  Created:    {}",
        link.created_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .bright_black()
    );
    println!("  Expires:    {}", expires.bright_black());
    println!("  Hits:       {}", link.hits.to_string().bright_white().bold());
    println!("  Status:     {}", status);
    println!();

    Ok(())
}

async fn create_link(
    service: &CliLinkService,
    base_url: &str,
    url: String,
    alias: Option<String>,
    expires_in: Option<u32>,
) -> Result<()> {
    let mut input = ShortenInput::new(url);
    if let Some(alias) = alias {
        input = input.with_custom_code(alias);
    }
    if let Some(seconds) = expires_in {
        input = input.with_expiry(Utc::now() + Duration::seconds(i64::from(seconds)));
    }

    let link = service
        .shorten(input)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("{}", "✅ Link created".green().bold());
    println!();
    println!(
        "  {}",
        build_short_url(base_url, &link.code).bright_yellow().bold()
    );
    println!("  → {}", link.long_url);
    if let Some(expires_at) = link.expires_at {
        println!(
            "  Expires: {}",
            expires_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string()
                .bright_black()
        );
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(config: &Config, action: DbAction) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            let pool = connect(&config.database_url, config.db_max_connections)
                .await
                .context("Failed to connect to database")?;

            sqlx::query("SELECT 1").fetch_one(&pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!();

            print_migration_status(&pool).await?;
        }
    }

    Ok(())
}

/// Lists embedded migrations and whether each has been applied.
async fn print_migration_status(pool: &SqlitePool) -> Result<()> {
    let table_exists: bool = sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = '_sqlx_migrations')",
    )
    .fetch_one(pool)
    .await?;

    let applied: HashSet<i64> = if table_exists {
        sqlx::query_scalar("SELECT version FROM _sqlx_migrations WHERE success = 1")
            .fetch_all(pool)
            .await?
            .into_iter()
            .collect()
    } else {
        HashSet::new()
    };

    println!("{}", "Migrations:".bright_white().bold());

    let mut pending = 0;
    for migration in MIGRATOR.iter() {
        let status = if applied.contains(&migration.version) {
            "applied".green()
        } else {
            pending += 1;
            "pending".yellow()
        };

        println!(
            "  {:<16} {:<30} {}",
            migration.version.to_string().bright_black(),
            migration.description,
            status
        );
    }

    println!();
    if pending > 0 {
        println!(
            "{}",
            format!("⚠️  {pending} pending migration(s), they run on next server start").yellow()
        );
    } else {
        println!("{}", "Schema is up to date".green());
    }

    Ok(())
}
