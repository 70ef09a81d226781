//! Domain Layer
//!
//! Contains entities and repository traits.

pub mod entity;
pub mod repository;

// Re-exports
pub use entity::bike::{Bike, BikeSpec};
pub use repository::BikeRepository;
