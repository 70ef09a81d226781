//! Infrastructure Layer
//!
//! Database implementations.

#[cfg(any(test, feature = "test-support"))]
pub mod memory;
pub mod postgres;

#[cfg(any(test, feature = "test-support"))]
pub use memory::InMemoryAdminRepository;
pub use postgres::PgAdminRepository;
