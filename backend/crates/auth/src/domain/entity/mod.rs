//! Entity Module

pub mod admin;
pub mod claims;

pub use admin::Admin;
pub use claims::Claims;
