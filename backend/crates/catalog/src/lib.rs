//! Catalog Backend Module
//!
//! Books and their reviews.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - One use case per operation
//! - `infra/` - PostgreSQL implementation
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! ## Rules
//! - Field violations are collected and reported together
//! - One review per user and book, enforced by a UNIQUE constraint
//! - Only the author of a review may update or delete it

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{CatalogError, CatalogResult};
pub use infra::postgres::PgCatalogRepository;
pub use presentation::{CatalogAppState, catalog_protected_router, catalog_public_router};
