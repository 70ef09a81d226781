//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Administrator entity, token claims, repository traits
//! - `application/` - Configuration, token service, sign-in use case
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, auth gate middleware, router
//!
//! ## Features
//! - Administrator login with username + password
//! - Stateless bearer tokens (HS256 JWT, 1 day validity)
//! - Auth gate middleware for protected routes in other crates
//!
//! ## Security Model
//! - Passwords verified against Argon2id PHC hashes
//! - Unknown user and wrong password are indistinguishable to the caller,
//!   in the response and in the Argon2 work done
//! - Tokens are never looked up server-side: validity is signature + expiry,
//!   so an administrator removed after issuance stays trusted until expiry

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::TokenService;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAdminRepository;
pub use presentation::middleware::{AdminPrincipal, AuthGate, require_admin};
pub use presentation::router::auth_router;
