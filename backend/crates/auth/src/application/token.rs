//! Token Service
//!
//! Issues and verifies HS256 bearer tokens. Verification is stateless: no
//! store lookup, no revocation list.

use std::fmt;

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use kernel::id::AdminId;

use crate::application::config::AuthConfig;
use crate::domain::entity::claims::Claims;
use crate::error::{AuthError, AuthResult};

/// Signs and verifies bearer tokens with the process-wide secret
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.jwt_secret.as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact: a token is dead the second `exp` passes
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl_secs: config.token_ttl_secs(),
        }
    }

    /// Issue a token for an administrator, valid from now
    pub fn issue(&self, admin_id: AdminId, username: &str) -> AuthResult<String> {
        self.issue_at(admin_id, username, Utc::now())
    }

    fn issue_at(
        &self,
        admin_id: AdminId,
        username: &str,
        issued_at: DateTime<Utc>,
    ) -> AuthResult<String> {
        let iat = issued_at.timestamp();
        let claims = Claims {
            id: admin_id,
            username: username.to_string(),
            iat,
            exp: iat + self.ttl_secs,
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Token signing failed: {e}")))
    }

    /// Verify signature, structure and expiry, returning the embedded claims
    pub fn verify(&self, token: &str) -> AuthResult<Claims> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(reason = ?e.kind(), "Token verification failed");
                AuthError::InvalidToken
            })
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithm", &Algorithm::HS256)
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}
