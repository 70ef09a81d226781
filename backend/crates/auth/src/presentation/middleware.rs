//! Auth Gate Middleware
//!
//! Guards protected routes in any crate. Mount with
//! `route_layer(axum::middleware::from_fn_with_state(gate, require_admin))`;
//! handlers behind it read the caller through `Extension<AdminPrincipal>`.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use kernel::id::AdminId;
use platform::bearer::extract_bearer;
use std::sync::Arc;

use crate::application::token::TokenService;
use crate::domain::entity::claims::Claims;
use crate::error::AuthError;

/// Middleware state: only the token verifier, never the store
#[derive(Clone, Debug)]
pub struct AuthGate {
    tokens: Arc<TokenService>,
}

impl AuthGate {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }
}

/// Authenticated caller, inserted into request extensions by [`require_admin`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminPrincipal {
    pub admin_id: AdminId,
    pub username: String,
}

impl From<Claims> for AdminPrincipal {
    fn from(claims: Claims) -> Self {
        Self {
            admin_id: claims.id,
            username: claims.username,
        }
    }
}

/// Middleware that requires a valid bearer token
pub async fn require_admin(
    State(gate): State<AuthGate>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = extract_bearer(req.headers()).ok_or(AuthError::MissingToken)?;
    let claims = gate.tokens.verify(token)?;

    req.extensions_mut().insert(AdminPrincipal::from(claims));

    Ok(next.run(req).await)
}
