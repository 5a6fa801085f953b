//! Short code generation and validation utilities.
//!
//! Codes are 6 characters drawn uniformly from `A-Z`, `a-z` and `0-9`,
//! which gives 62^6 (about 56.8 billion) possible codes.

use std::fmt;
use std::future::Future;
use std::sync::{Arc, LazyLock};

use metrics::counter;
use rand::Rng;
use regex::Regex;
use tracing::debug;

use crate::domain::repositories::RepositoryError;

/// Number of characters in a short code.
pub const CODE_LENGTH: usize = 6;

/// Default bound on consecutive collisions before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Alphabet short codes are drawn from.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Codes that have the shape of a short code but name a fixed route.
///
/// `GET /health` is matched before `GET /{code}`, so such a code could never
/// be resolved.
const RESERVED_CODES: &[&str] = &["health"];

/// Compiled regex for short code validation.
static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{6}$").unwrap());

/// Errors that can occur while looking for a free short code.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Failed to generate a unique short code after {attempts} attempts")]
    ExhaustedAttempts { attempts: usize },

    #[error("Short code lookup failed: {0}")]
    Lookup(RepositoryError),
}

/// Generates a random short code.
///
/// Uses the thread-local RNG from `rand`. The output is not meant to be
/// unguessable, only spread evenly over the code space.
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..ALPHABET.len());
            ALPHABET[idx] as char
        })
        .collect()
}

/// Returns true if `code` has the exact shape of a short code.
///
/// # Examples
///
/// ```ignore
/// assert!(is_valid_code("aB3xY9"));
/// assert!(!is_valid_code("abc"));     // Too short
/// assert!(!is_valid_code("ab!de6"));  // Not alphanumeric
/// ```
pub fn is_valid_code(code: &str) -> bool {
    CODE_REGEX.is_match(code)
}

/// Returns true if `code` is reserved for a system route.
pub fn is_reserved_code(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

type CodeSource = Arc<dyn Fn() -> String + Send + Sync>;

/// Draws candidate codes and keeps the first one storage does not know.
///
/// The candidate source defaults to [`generate_code`] and can be replaced
/// with [`CodeGenerator::with_source`] to script collisions.
#[derive(Clone)]
pub struct CodeGenerator {
    max_attempts: usize,
    source: CodeSource,
}

impl CodeGenerator {
    /// Creates a generator backed by [`generate_code`].
    ///
    /// `max_attempts` is raised to 1 if zero is given.
    pub fn new(max_attempts: usize) -> Self {
        Self::with_source(max_attempts, generate_code)
    }

    /// Creates a generator that takes its candidates from `source`.
    pub fn with_source<F>(max_attempts: usize, source: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self {
            max_attempts: max_attempts.max(1),
            source: Arc::new(source),
        }
    }

    /// Maximum number of candidates tried per call.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Returns the first candidate for which `exists` reports `false`.
    ///
    /// `exists` is called once per candidate, typically backed by a storage
    /// lookup. A code returned here can still be taken by a concurrent
    /// writer; the unique constraint at insert time has the final word.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::ExhaustedAttempts`] when `max_attempts`
    /// consecutive candidates already exist.
    /// Returns [`GenerationError::Lookup`] if the existence check fails.
    pub async fn generate_unique<F, Fut>(&self, mut exists: F) -> Result<String, GenerationError>
    where
        F: FnMut(String) -> Fut,
        Fut: Future<Output = Result<bool, RepositoryError>>,
    {
        for attempt in 1..=self.max_attempts {
            let candidate = (self.source)();

            let taken = is_reserved_code(&candidate)
                || exists(candidate.clone())
                    .await
                    .map_err(GenerationError::Lookup)?;

            if !taken {
                return Ok(candidate);
            }

            debug!(attempt, code = %candidate, "Short code collision, retrying");
            counter!("code_collisions_total").increment(1);
        }

        Err(GenerationError::ExhaustedAttempts {
            attempts: self.max_attempts,
        })
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

impl fmt::Debug for CodeGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeGenerator")
            .field("max_attempts", &self.max_attempts)
            .finish_non_exhaustive()
    }
}
