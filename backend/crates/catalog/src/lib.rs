//! Catalog Backend Module
//!
//! Bike listings: public reads, administrator-only writes.
//!
//! - `domain/` - Bike entity and repository trait
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Writes are full replacements; every field is required on create and
//! update. Listing order is whatever the store returns.

pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{CatalogError, CatalogResult};
pub use infra::postgres::PgBikeRepository;
pub use presentation::router::catalog_router;
