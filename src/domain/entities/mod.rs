//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`UrlMapping`] - A persisted short code to long URL mapping
//! - [`NewUrlMapping`] - Input for creating a mapping
//! - [`ShortLink`] - A mapping together with its public short URL

pub mod url_mapping;

pub use url_mapping::{NewUrlMapping, ShortLink, UrlMapping};
