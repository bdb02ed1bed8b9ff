//! SQLite connection pool setup.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

/// Embedded schema migrations from `./migrations`.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Opens (creating if needed) the SQLite database at `database_url`.
///
/// File databases run in WAL mode; all connections use a 5 second busy timeout. In-memory
/// databases are private to a single connection, so their pool is capped at
/// one connection.
///
/// # Errors
///
/// Returns an error if the URL is malformed, the parent directory cannot be
/// created, or the connection fails.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let in_memory = is_in_memory(database_url);

    if !in_memory {
        ensure_parent_dir(database_url)?;
    }

    let mut options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("Invalid database URL '{database_url}'"))?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5))
        .foreign_keys(true);

    if !in_memory {
        options = options.journal_mode(SqliteJournalMode::Wal);
    }

    let mut pool_options = SqlitePoolOptions::new().acquire_timeout(Duration::from_secs(30));

    // Closing the last connection would drop an in-memory database.
    pool_options = if in_memory {
        pool_options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        pool_options.max_connections(max_connections)
    };

    pool_options
        .connect_with(options)
        .await
        .context("Failed to connect to database")
}

/// Opens the database and applies pending migrations.
pub async fn connect_and_migrate(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let pool = connect(database_url, max_connections).await?;

    MIGRATOR
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    Ok(pool)
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Creates the directory that will hold the database file.
fn ensure_parent_dir(database_url: &str) -> Result<()> {
    let path = database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");
    let path = path.split('?').next().unwrap_or(path);

    if let Some(dir) = Path::new(path).parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create database directory {}", dir.display()))?;
    }

    Ok(())
}
