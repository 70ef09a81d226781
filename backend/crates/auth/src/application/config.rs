//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;
use std::time::Duration;

/// Signing secret used when none is configured.
///
/// It is public knowledge, so any deployment running with it accepts forged
/// tokens. Startup logs a warning when it is in effect.
pub const FALLBACK_JWT_SECRET: &str = "bike-showroom-insecure-default-secret";

/// Token validity window (1 day)
pub const TOKEN_TTL: Duration = Duration::from_secs(24 * 3600);

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC secret for signing tokens
    pub jwt_secret: String,
    /// Token validity window
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: FALLBACK_JWT_SECRET.to_string(),
            token_ttl: TOKEN_TTL,
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Build config from an optional secret; blank counts as unset
    pub fn with_secret(secret: Option<String>) -> Self {
        match secret {
            Some(secret) if !secret.trim().is_empty() => Self {
                jwt_secret: secret,
                ..Default::default()
            },
            _ => Self::default(),
        }
    }

    /// Whether the well-known fallback secret is in effect
    pub fn uses_fallback_secret(&self) -> bool {
        self.jwt_secret == FALLBACK_JWT_SECRET
    }

    /// Get token TTL in seconds
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
