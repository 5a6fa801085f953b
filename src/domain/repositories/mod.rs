//! Repository trait definitions for the domain layer.
//!
//! This module defines the persistence contract the core operations depend on.
//! Implementations live in `crate::infrastructure::persistence`.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - URL mapping storage with atomic click counting
//!
//! # Testing
//!
//! A `mockall` mock is generated for unit tests; integration tests use
//! [`crate::infrastructure::persistence::InMemoryLinkRepository`].

pub mod link_repository;

pub use link_repository::{LinkRepository, RepositoryError};

#[cfg(test)]
pub use link_repository::MockLinkRepository;
