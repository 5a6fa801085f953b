//! Typed outcomes of the core link operations.
//!
//! Expected conditions (bad input, unknown codes) are ordinary variants;
//! only [`RepositoryError`] payloads describe real storage faults.

use crate::domain::repositories::RepositoryError;
use crate::utils::code_generator::GenerationError;
use crate::utils::url_normalizer::UrlValidationError;

/// Errors returned by [`crate::application::services::LinkService::shorten`].
#[derive(Debug, thiserror::Error)]
pub enum ShortenError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] UrlValidationError),

    #[error("Failed to generate a unique short code after {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    #[error("Storage failure: {0}")]
    StorageFailure(RepositoryError),
}

impl From<GenerationError> for ShortenError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::ExhaustedAttempts { attempts } => Self::GenerationExhausted { attempts },
            GenerationError::Lookup(e) => Self::StorageFailure(e),
        }
    }
}

/// Errors returned by [`crate::application::services::LinkService::resolve_and_count`].
///
/// `MalformedCode` and `NotFound` are kept apart for logging only; the HTTP
/// layer answers both with the same 404.
#[derive(Debug, thiserror::Error)]
pub enum RedirectError {
    #[error("Malformed short code: {0}")]
    MalformedCode(String),

    #[error("Short code not found: {0}")]
    NotFound(String),

    #[error("Storage failure: {0}")]
    StorageFailure(RepositoryError),
}

/// Errors returned by deletion and lookup by id.
#[derive(Debug, thiserror::Error)]
pub enum DeleteError {
    #[error("URL mapping {0} not found")]
    NotFound(i64),

    #[error("Storage failure: {0}")]
    StorageFailure(RepositoryError),
}
