//! Contact Router

use auth::{AuthGate, require_admin};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::domain::repository::ContactRepository;
use crate::presentation::handlers::{self, ContactAppState};

/// Create the Contact router for any submission repository
pub fn contact_router<R>(repo: R, gate: AuthGate) -> Router
where
    R: ContactRepository + Clone + Send + Sync + 'static,
{
    let state = ContactAppState {
        repo: Arc::new(repo),
    };

    let protected = Router::new()
        .route(
            "/contact-submissions",
            get(handlers::list_submissions::<R>),
        )
        .route_layer(middleware::from_fn_with_state(gate, require_admin));

    Router::new()
        .route("/contact", post(handlers::submit::<R>))
        .merge(protected)
        .with_state(state)
}
