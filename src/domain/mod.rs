//! Domain layer containing business entities and logic.
//!
//! This module defines the single persisted entity of the service, the
//! repository contract the persistence layer implements, and the typed
//! outcomes of the core operations. It has no dependency on HTTP or SQL.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`errors`] - Error taxonomy of shorten, redirect and delete
//!
//! # Redirect Flow
//!
//! 1. HTTP handler receives `GET /{code}`
//! 2. [`crate::application::services::LinkService::resolve_and_count`] checks
//!    the code syntax and looks the mapping up
//! 3. The click counter is incremented by a single atomic storage operation
//! 4. The handler answers with `308 Permanent Redirect`

pub mod entities;
pub mod errors;
pub mod repositories;
