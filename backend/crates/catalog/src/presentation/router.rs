//! Catalog Router

use auth::{AuthGate, require_admin};
use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::domain::repository::BikeRepository;
use crate::presentation::handlers::{self, CatalogAppState};

/// Create the Catalog router for any bike repository
///
/// Reads are public; writes sit behind the auth gate.
pub fn catalog_router<R>(repo: R, gate: AuthGate) -> Router
where
    R: BikeRepository + Clone + Send + Sync + 'static,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
    };

    let public = Router::new()
        .route("/bikes", get(handlers::list_bikes::<R>))
        .route("/bikes/{id}", get(handlers::get_bike::<R>));

    let protected = Router::new()
        .route("/bikes", post(handlers::create_bike::<R>))
        .route(
            "/bikes/{id}",
            put(handlers::update_bike::<R>).delete(handlers::delete_bike::<R>),
        )
        .route_layer(middleware::from_fn_with_state(gate, require_admin));

    public.merge(protected).with_state(state)
}
