//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod sign_in;
pub mod token;

// Re-exports
pub use config::AuthConfig;
pub use sign_in::{
    Argon2Verifier, CredentialVerifier, SignInInput, SignInOutput, SignInUseCase,
    prepare_decoy_hash,
};
pub use token::TokenService;
