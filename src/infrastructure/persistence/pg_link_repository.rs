//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::{LinkRepository, RepositoryError};

/// Row shape of the `url_mappings` table.
#[derive(Debug, sqlx::FromRow)]
struct UrlMappingRow {
    id: i64,
    original_url: String,
    short_code: String,
    click_count: i64,
    created_at: DateTime<Utc>,
}

impl From<UrlMappingRow> for UrlMapping {
    fn from(r: UrlMappingRow) -> Self {
        UrlMapping::new(r.id, r.original_url, r.short_code, r.click_count, r.created_at)
    }
}

/// PostgreSQL repository for URL mappings.
///
/// Uniqueness of short codes is enforced by the `url_mappings_short_code_key`
/// constraint and click counts are bumped with an in-place `UPDATE`, so
/// concurrent writers are serialized by the database, not by this process.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlMapping>, RepositoryError> {
        let row = sqlx::query_as::<_, UrlMappingRow>(
            r#"
            SELECT id, original_url, short_code, click_count, created_at
            FROM url_mappings
            WHERE short_code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlMapping::from))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UrlMapping>, RepositoryError> {
        let row = sqlx::query_as::<_, UrlMappingRow>(
            r#"
            SELECT id, original_url, short_code, click_count, created_at
            FROM url_mappings
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlMapping::from))
    }

    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, RepositoryError> {
        let row = sqlx::query_as::<_, UrlMappingRow>(
            r#"
            INSERT INTO url_mappings (original_url, short_code)
            VALUES ($1, $2)
            RETURNING id, original_url, short_code, click_count, created_at
            "#,
        )
        .bind(&new_mapping.original_url)
        .bind(&new_mapping.short_code)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn increment_click_count(&self, id: i64) -> Result<(), RepositoryError> {
        let result =
            sqlx::query("UPDATE url_mappings SET click_count = click_count + 1 WHERE id = $1")
                .bind(id)
                .execute(self.pool.as_ref())
                .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn list_all_ordered_by_created_at_desc(&self) -> Result<Vec<UrlMapping>, RepositoryError> {
        let rows = sqlx::query_as::<_, UrlMappingRow>(
            r#"
            SELECT id, original_url, short_code, click_count, created_at
            FROM url_mappings
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(UrlMapping::from).collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM url_mappings WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
