//! DTOs for URL mapping responses.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{ShortLink, UrlMapping};

/// JSON representation of a URL mapping.
#[derive(Debug, Serialize)]
pub struct UrlMappingResponse {
    pub id: i64,
    pub original_url: String,
    pub short_url: String,
    pub short_code: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
}

impl UrlMappingResponse {
    pub fn from_mapping(mapping: UrlMapping, short_url: String) -> Self {
        Self {
            id: mapping.id,
            original_url: mapping.original_url,
            short_url,
            short_code: mapping.short_code,
            click_count: mapping.click_count,
            created_at: mapping.created_at,
        }
    }
}

impl From<ShortLink> for UrlMappingResponse {
    fn from(link: ShortLink) -> Self {
        Self::from_mapping(link.mapping, link.short_url)
    }
}

/// Response for `GET /api/urls`.
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub count: usize,
    pub items: Vec<UrlMappingResponse>,
}
