//! Domain Layer
//!
//! Contains entities and repository traits.

pub mod entity;
pub mod repository;

// Re-exports
pub use entity::{admin::Admin, claims::Claims};
pub use repository::AdminRepository;
