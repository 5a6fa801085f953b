//! Process-local implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::{LinkRepository, RepositoryError};
use crate::utils::db_error::SHORT_CODE_CONSTRAINT;

/// A stored row. The counter is atomic so increments only need a read lock.
#[derive(Debug)]
struct StoredMapping {
    id: i64,
    original_url: String,
    short_code: String,
    clicks: AtomicI64,
    created_at: DateTime<Utc>,
}

impl StoredMapping {
    fn snapshot(&self) -> UrlMapping {
        UrlMapping::new(
            self.id,
            self.original_url.clone(),
            self.short_code.clone(),
            self.clicks.load(Ordering::Acquire),
            self.created_at,
        )
    }
}

#[derive(Debug)]
struct Tables {
    rows: BTreeMap<i64, StoredMapping>,
    by_code: HashMap<String, i64>,
    next_id: i64,
}

/// In-memory repository for URL mappings.
///
/// Mirrors the guarantees of the PostgreSQL schema: short codes are unique
/// among live rows, deleted codes become free again, and click counts are
/// increased with `fetch_add` so concurrent redirects never lose an update.
/// Data lives only as long as the process.
#[derive(Debug)]
pub struct InMemoryLinkRepository {
    tables: RwLock<Tables>,
}

impl InMemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables {
                rows: BTreeMap::new(),
                by_code: HashMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlMapping>, RepositoryError> {
        let tables = self.tables.read().await;

        Ok(tables
            .by_code
            .get(code)
            .and_then(|id| tables.rows.get(id))
            .map(StoredMapping::snapshot))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UrlMapping>, RepositoryError> {
        let tables = self.tables.read().await;

        Ok(tables.rows.get(&id).map(StoredMapping::snapshot))
    }

    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, RepositoryError> {
        let mut tables = self.tables.write().await;

        if tables.by_code.contains_key(&new_mapping.short_code) {
            return Err(RepositoryError::UniqueViolation {
                constraint: Some(SHORT_CODE_CONSTRAINT.to_string()),
            });
        }

        let id = tables.next_id;
        tables.next_id += 1;

        let stored = StoredMapping {
            id,
            original_url: new_mapping.original_url,
            short_code: new_mapping.short_code,
            clicks: AtomicI64::new(0),
            created_at: Utc::now(),
        };
        let mapping = stored.snapshot();

        tables.by_code.insert(stored.short_code.clone(), id);
        tables.rows.insert(id, stored);

        Ok(mapping)
    }

    async fn increment_click_count(&self, id: i64) -> Result<(), RepositoryError> {
        let tables = self.tables.read().await;

        let stored = tables.rows.get(&id).ok_or(RepositoryError::NotFound)?;
        stored.clicks.fetch_add(1, Ordering::AcqRel);

        Ok(())
    }

    async fn list_all_ordered_by_created_at_desc(&self) -> Result<Vec<UrlMapping>, RepositoryError> {
        let tables = self.tables.read().await;

        let mut mappings: Vec<UrlMapping> =
            tables.rows.values().map(StoredMapping::snapshot).collect();
        mappings.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(mappings)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        let mut tables = self.tables.write().await;

        let stored = tables.rows.remove(&id).ok_or(RepositoryError::NotFound)?;
        tables.by_code.remove(&stored.short_code);

        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
