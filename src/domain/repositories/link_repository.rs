//! Repository trait for URL mapping data access.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use async_trait::async_trait;

/// Errors reported by a [`LinkRepository`].
///
/// Backends classify failures into these variants from typed driver
/// information, so callers never inspect error messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("Unique constraint violation")]
    UniqueViolation { constraint: Option<String> },

    #[error("Record not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Repository interface for managing URL mappings.
///
/// Every method is an independent unit of work: no locks are held between
/// calls, so shorten, redirect, list and delete may run concurrently.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - Process-local implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds a mapping by its short code.
    ///
    /// Also serves as the existence check of the code generator.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] on backend failures.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlMapping>, RepositoryError>;

    /// Finds a mapping by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] on backend failures.
    async fn find_by_id(&self, id: i64) -> Result<Option<UrlMapping>, RepositoryError>;

    /// Persists a new mapping with a zero click count.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::UniqueViolation`] if the short code is taken.
    /// Returns [`RepositoryError::Storage`] on backend failures.
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, RepositoryError>;

    /// Adds one to the click counter of a mapping in a single atomic step.
    ///
    /// Concurrent calls for the same id must never lose an update.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if the row vanished since lookup.
    /// Returns [`RepositoryError::Storage`] on backend failures.
    async fn increment_click_count(&self, id: i64) -> Result<(), RepositoryError>;

    /// Lists every mapping, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] on backend failures.
    async fn list_all_ordered_by_created_at_desc(&self) -> Result<Vec<UrlMapping>, RepositoryError>;

    /// Removes a mapping. Its short code becomes available again.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no row has this id.
    /// Returns [`RepositoryError::Storage`] on backend failures.
    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError>;

    /// Checks if the storage backend is reachable.
    async fn health_check(&self) -> bool;
}
