//! Contact Backend Module
//!
//! Public contact form intake; submissions are readable by administrators
//! only and are never modified after creation.

pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{ContactError, ContactResult};
pub use infra::postgres::PgContactRepository;
pub use presentation::router::contact_router;
