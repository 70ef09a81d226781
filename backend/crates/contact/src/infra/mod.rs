//! Infrastructure Layer

#[cfg(any(test, feature = "test-support"))]
pub mod memory;
pub mod postgres;

#[cfg(any(test, feature = "test-support"))]
pub use memory::InMemoryContactRepository;
pub use postgres::PgContactRepository;
