//! Entity Module

pub mod submission;

pub use submission::{ContactForm, ContactSubmission};
