//! Link creation, redirect resolution and management service.

use std::sync::Arc;

use metrics::counter;
use tracing::{debug, info, warn};

use crate::domain::entities::{NewUrlMapping, ShortLink, UrlMapping};
use crate::domain::errors::{DeleteError, RedirectError, ShortenError};
use crate::domain::repositories::{LinkRepository, RepositoryError};
use crate::utils::code_generator::{CodeGenerator, is_valid_code};
use crate::utils::url_normalizer::normalize_and_validate;

/// Service for creating, resolving, listing and deleting short links.
///
/// Holds an explicitly injected repository; every method is an independent
/// unit of work and all cross-request coordination happens in storage.
pub struct LinkService<R: LinkRepository + ?Sized> {
    repository: Arc<R>,
    generator: CodeGenerator,
    base_url: String,
}

impl<R: LinkRepository + ?Sized> LinkService<R> {
    /// Creates a new link service with the default code generator.
    ///
    /// `base_url` is the public origin short URLs are built on, e.g.
    /// `https://sho.rt`. A trailing slash is ignored.
    pub fn new(repository: Arc<R>, base_url: impl Into<String>) -> Self {
        Self::with_generator(repository, CodeGenerator::default(), base_url)
    }

    /// Creates a new link service with a custom code generator.
    pub fn with_generator(
        repository: Arc<R>,
        generator: CodeGenerator,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            repository,
            generator,
            base_url,
        }
    }

    /// Creates a short link for a submitted URL.
    ///
    /// # Flow
    ///
    /// 1. Normalize and validate the URL (no storage access on rejection)
    /// 2. Generate a code that storage does not know yet
    /// 3. Insert the mapping with a zero click count
    ///
    /// If a concurrent request commits the same code between steps 2 and 3,
    /// the insert hits the unique constraint and generation starts over, at
    /// most `max_attempts` times.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::InvalidUrl`] if the URL is rejected.
    /// Returns [`ShortenError::GenerationExhausted`] if no free code was found.
    /// Returns [`ShortenError::StorageFailure`] on storage errors.
    pub async fn shorten(&self, raw_url: &str) -> Result<ShortLink, ShortenError> {
        let original_url = normalize_and_validate(raw_url)?;
        let max_attempts = self.generator.max_attempts();
        let repository = &self.repository;

        for attempt in 1..=max_attempts {
            let short_code = self
                .generator
                .generate_unique(|candidate| async move {
                    repository
                        .find_by_code(&candidate)
                        .await
                        .map(|found| found.is_some())
                })
                .await?;

            let new_mapping = NewUrlMapping {
                original_url: original_url.clone(),
                short_code,
            };

            match repository.insert(new_mapping).await {
                Ok(mapping) => {
                    info!(
                        id = mapping.id,
                        short_code = %mapping.short_code,
                        "Short link created"
                    );
                    counter!("links_created_total").increment(1);

                    let short_url = self.short_url(&mapping.short_code);
                    return Ok(ShortLink { mapping, short_url });
                }
                Err(RepositoryError::UniqueViolation { constraint }) => {
                    debug!(attempt, ?constraint, "Short code taken at insert time, regenerating");
                    counter!("code_collisions_total").increment(1);
                }
                Err(e) => return Err(ShortenError::StorageFailure(e)),
            }
        }

        Err(ShortenError::GenerationExhausted {
            attempts: max_attempts,
        })
    }

    /// Resolves a short code to its original URL and counts the visit.
    ///
    /// The counter is bumped by a single atomic storage operation. Counting
    /// is best-effort: if the increment fails the URL is still returned and
    /// the failure is logged.
    ///
    /// # Errors
    ///
    /// Returns [`RedirectError::MalformedCode`] if the code is not 6 alphanumerics.
    /// Returns [`RedirectError::NotFound`] if no mapping has this code.
    /// Returns [`RedirectError::StorageFailure`] if the lookup fails.
    pub async fn resolve_and_count(&self, code: &str) -> Result<String, RedirectError> {
        if !is_valid_code(code) {
            return Err(RedirectError::MalformedCode(code.to_string()));
        }

        let mapping = self
            .repository
            .find_by_code(code)
            .await
            .map_err(RedirectError::StorageFailure)?
            .ok_or_else(|| RedirectError::NotFound(code.to_string()))?;

        if let Err(e) = self.repository.increment_click_count(mapping.id).await {
            warn!(
                error = %e,
                id = mapping.id,
                short_code = %mapping.short_code,
                "Failed to increment click count, redirecting anyway"
            );
            counter!("click_increment_failures_total").increment(1);
        }

        counter!("redirects_total").increment(1);

        Ok(mapping.original_url)
    }

    /// Lists all mappings, newest first. Each call re-reads storage.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] on storage errors.
    pub async fn list_all(&self) -> Result<Vec<UrlMapping>, RepositoryError> {
        self.repository.list_all_ordered_by_created_at_desc().await
    }

    /// Retrieves a mapping by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DeleteError::NotFound`] if no mapping has this id.
    /// Returns [`DeleteError::StorageFailure`] on storage errors.
    pub async fn find_by_id(&self, id: i64) -> Result<UrlMapping, DeleteError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(DeleteError::StorageFailure)?
            .ok_or(DeleteError::NotFound(id))
    }

    /// Deletes a mapping and returns it as it was just before removal. Its
    /// short code may be generated again afterwards.
    ///
    /// Deleting the same id twice yields [`DeleteError::NotFound`] the second time.
    ///
    /// # Errors
    ///
    /// Returns [`DeleteError::NotFound`] if no mapping has this id, including
    /// when a concurrent delete removes it between lookup and removal.
    /// Returns [`DeleteError::StorageFailure`] on storage errors.
    pub async fn delete_by_id(&self, id: i64) -> Result<UrlMapping, DeleteError> {
        let mapping = self.find_by_id(id).await?;

        match self.repository.delete_by_id(id).await {
            Ok(()) => {
                info!(id, code = %mapping.short_code, "Short link deleted");
                Ok(mapping)
            }
            Err(RepositoryError::NotFound) => Err(DeleteError::NotFound(id)),
            Err(e) => Err(DeleteError::StorageFailure(e)),
        }
    }

    /// Constructs the public short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }

    /// Checks if the storage backend is reachable.
    pub async fn storage_healthy(&self) -> bool {
        self.repository.health_check().await
    }
}
