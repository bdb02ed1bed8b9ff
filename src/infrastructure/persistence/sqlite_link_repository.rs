//! SQLite implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation;

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    code: String,
    long_url: String,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
    hits: i64,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(
            row.id,
            row.code,
            row.long_url,
            row.created_at,
            row.expires_at,
            row.hits,
        )
    }
}

/// SQLite repository for link storage and retrieval.
///
/// Uniqueness of codes is enforced by the `UNIQUE` constraint on
/// `links.code`, so a concurrent insert of the same code fails atomically
/// instead of racing a separate existence check.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let result = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (code, long_url, created_at, expires_at, hits)
            VALUES (?, ?, ?, ?, 0)
            RETURNING id, code, long_url, created_at, expires_at, hits
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.long_url)
        .bind(new_link.created_at)
        .bind(new_link.expires_at)
        .fetch_one(self.pool.as_ref())
        .await;

        match result {
            Ok(row) => Ok(row.into()),
            Err(e) if is_unique_violation(&e) => Err(AppError::Conflict(new_link.code)),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, code, long_url, created_at, expires_at, hits
            FROM links
            WHERE code = ?
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn increment_hits(&self, code: &str) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE links SET hits = hits + 1 WHERE code = ?")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(code.to_string()));
        }

        Ok(())
    }

    async fn purge_expired(&self, cutoff: DateTime<Utc>) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM links
            WHERE expires_at IS NOT NULL AND expires_at <= ?
            "#,
        )
        .bind(cutoff)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
