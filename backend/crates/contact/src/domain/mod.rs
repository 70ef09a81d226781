//! Domain Layer

pub mod entity;
pub mod repository;

// Re-exports
pub use entity::submission::{ContactForm, ContactSubmission};
pub use repository::ContactRepository;
