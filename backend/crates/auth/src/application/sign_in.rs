//! Sign In Use Case
//!
//! Authenticates an administrator and issues a bearer token.
//!
//! Every attempt costs exactly one Argon2 verification. When the username is
//! unknown the candidate is checked against a decoy hash, so response time
//! does not reveal which usernames exist.

use std::sync::{Arc, LazyLock};

use kernel::id::AdminId;
use platform::password::{ClearTextPassword, HashedPassword};

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::repository::AdminRepository;
use crate::error::{AuthError, AuthResult};

/// Hash checked when no administrator matches the username
static DECOY_HASH: LazyLock<Option<HashedPassword>> = LazyLock::new(|| {
    ClearTextPassword::candidate("decoy-credential-never-matches".to_string())
        .hash(None)
        .inspect_err(|e| tracing::error!(error = %e, "Failed to prepare decoy password hash"))
        .ok()
});

/// Build the decoy hash ahead of the first login attempt
pub fn prepare_decoy_hash() {
    LazyLock::force(&DECOY_HASH);
}

/// Checks a login candidate against a stored hash
pub trait CredentialVerifier: Send + Sync + 'static {
    fn verify(&self, hash: &HashedPassword, candidate: &ClearTextPassword) -> bool;
}

/// Argon2 verification with the configured pepper
pub struct Argon2Verifier {
    pepper: Option<Vec<u8>>,
}

impl Argon2Verifier {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            pepper: config.password_pepper.clone(),
        }
    }
}

impl CredentialVerifier for Argon2Verifier {
    fn verify(&self, hash: &HashedPassword, candidate: &ClearTextPassword) -> bool {
        hash.verify(candidate, self.pepper.as_deref())
    }
}

/// Sign in input
pub struct SignInInput {
    pub username: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    /// Signed bearer token
    pub token: String,
    pub admin_id: AdminId,
    pub username: String,
}

/// Sign in use case
pub struct SignInUseCase<R, V = Argon2Verifier>
where
    R: AdminRepository,
    V: CredentialVerifier,
{
    admin_repo: Arc<R>,
    tokens: Arc<TokenService>,
    verifier: Arc<V>,
}

impl<R> SignInUseCase<R>
where
    R: AdminRepository,
{
    pub fn new(admin_repo: Arc<R>, tokens: Arc<TokenService>, config: Arc<AuthConfig>) -> Self {
        Self::with_verifier(admin_repo, tokens, Arc::new(Argon2Verifier::new(&config)))
    }
}

impl<R, V> SignInUseCase<R, V>
where
    R: AdminRepository,
    V: CredentialVerifier,
{
    pub fn with_verifier(admin_repo: Arc<R>, tokens: Arc<TokenService>, verifier: Arc<V>) -> Self {
        Self {
            admin_repo,
            tokens,
            verifier,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let admin = self.admin_repo.find_by_username(&input.username).await?;

        let Some(hash) = admin
            .as_ref()
            .map(|a| a.password_hash.clone())
            .or_else(|| DECOY_HASH.clone())
        else {
            return Err(AuthError::InvalidCredentials);
        };

        let candidate = ClearTextPassword::candidate(input.password);
        let verifier = self.verifier.clone();

        // Argon2 is CPU-bound; keep it off the async workers
        let password_valid = tokio::task::spawn_blocking(move || verifier.verify(&hash, &candidate))
            .await
            .map_err(|e| AuthError::Internal(format!("Password verification task failed: {e}")))?;

        let admin = match admin {
            Some(admin) if password_valid => admin,
            _ => return Err(AuthError::InvalidCredentials),
        };

        let token = self.tokens.issue(admin.admin_id, &admin.username)?;

        tracing::info!(admin_id = %admin.admin_id, "Administrator signed in");

        Ok(SignInOutput {
            token,
            admin_id: admin.admin_id,
            username: admin.username,
        })
    }
}
