//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use kernel::validation::require;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::application::{SignInInput, SignInUseCase};
use crate::domain::repository::AdminRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    LoginRequest, LoginResponse, VerifyTokenRequest, VerifyTokenResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<Json<LoginResponse>>
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = body?;

    let input = SignInInput {
        username: require("username", req.username)?,
        password: require("password", req.password)?,
    };

    let use_case = SignInUseCase::new(
        state.repo.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );
    let output = use_case.execute(input).await?;

    Ok(Json(LoginResponse {
        message: "Login successful",
        token: output.token,
    }))
}

// ============================================================================
// Verify Token
// ============================================================================

/// POST /api/verify-token
///
/// A body that cannot be read counts as "no token".
pub async fn verify_token<R>(
    State(state): State<AuthAppState<R>>,
    body: Result<Json<VerifyTokenRequest>, JsonRejection>,
) -> AuthResult<Json<VerifyTokenResponse>>
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    let token = body
        .ok()
        .and_then(|Json(req)| req.token)
        .filter(|token| !token.trim().is_empty())
        .ok_or(AuthError::MissingToken)?;

    let claims = state.tokens.verify(&token)?;

    Ok(Json(VerifyTokenResponse {
        valid: true,
        user: claims,
    }))
}
