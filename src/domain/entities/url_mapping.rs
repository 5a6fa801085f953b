//! URL mapping entity representing a shortened URL.

use chrono::{DateTime, Utc};

/// A persisted mapping between a short code and its original URL.
///
/// `original_url`, `short_code` and `created_at` never change after creation.
/// `click_count` only moves through
/// [`crate::domain::repositories::LinkRepository::increment_click_count`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        click_count: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            click_count,
            created_at,
        }
    }
}

/// Input data for creating a new mapping. The click counter always starts at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlMapping {
    pub original_url: String,
    pub short_code: String,
}

/// A freshly created mapping plus the public URL that redirects to it.
#[derive(Debug, Clone)]
pub struct ShortLink {
    pub mapping: UrlMapping,
    pub short_url: String,
}
