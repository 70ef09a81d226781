//! HTTP Handlers

use auth::AdminPrincipal;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use kernel::id::BikeId;
use std::sync::Arc;

use crate::domain::repository::BikeRepository;
use crate::error::{CatalogError, CatalogResult};
use crate::presentation::dto::{
    BikeMutationResponse, BikeRequest, BikeResponse, MessageResponse,
};

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<R>
where
    R: BikeRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// A path id that does not parse cannot name a row
fn parse_id(raw: &str) -> CatalogResult<BikeId> {
    BikeId::parse(raw).ok_or(CatalogError::BikeNotFound)
}

// ============================================================================
// Public reads
// ============================================================================

/// GET /api/bikes
pub async fn list_bikes<R>(
    State(state): State<CatalogAppState<R>>,
) -> CatalogResult<Json<Vec<BikeResponse>>>
where
    R: BikeRepository + Clone + Send + Sync + 'static,
{
    let bikes = state.repo.list().await?;
    Ok(Json(bikes.into_iter().map(BikeResponse::from).collect()))
}

/// GET /api/bikes/{id}
pub async fn get_bike<R>(
    State(state): State<CatalogAppState<R>>,
    Path(raw_id): Path<String>,
) -> CatalogResult<Json<BikeResponse>>
where
    R: BikeRepository + Clone + Send + Sync + 'static,
{
    let bike_id = parse_id(&raw_id)?;

    let bike = state
        .repo
        .find_by_id(bike_id)
        .await?
        .ok_or(CatalogError::BikeNotFound)?;

    Ok(Json(bike.into()))
}

// ============================================================================
// Administrator writes
// ============================================================================

/// POST /api/bikes
pub async fn create_bike<R>(
    State(state): State<CatalogAppState<R>>,
    Extension(admin): Extension<AdminPrincipal>,
    body: Result<Json<BikeRequest>, JsonRejection>,
) -> CatalogResult<(StatusCode, Json<BikeMutationResponse>)>
where
    R: BikeRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = body?;
    let spec = req.into_spec()?;

    let bike = state.repo.create(&spec).await?;

    tracing::info!(bike_id = %bike.bike_id, admin_id = %admin.admin_id, "Bike created");

    Ok((
        StatusCode::CREATED,
        Json(BikeMutationResponse {
            message: "Bike created successfully",
            bike: bike.into(),
        }),
    ))
}

/// PUT /api/bikes/{id}
pub async fn update_bike<R>(
    State(state): State<CatalogAppState<R>>,
    Extension(admin): Extension<AdminPrincipal>,
    Path(raw_id): Path<String>,
    body: Result<Json<BikeRequest>, JsonRejection>,
) -> CatalogResult<Json<BikeMutationResponse>>
where
    R: BikeRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = body?;
    let spec = req.into_spec()?;
    let bike_id = parse_id(&raw_id)?;

    let bike = state
        .repo
        .update(bike_id, &spec)
        .await?
        .ok_or(CatalogError::BikeNotFound)?;

    tracing::info!(bike_id = %bike.bike_id, admin_id = %admin.admin_id, "Bike updated");

    Ok(Json(BikeMutationResponse {
        message: "Bike updated successfully",
        bike: bike.into(),
    }))
}

/// DELETE /api/bikes/{id}
pub async fn delete_bike<R>(
    State(state): State<CatalogAppState<R>>,
    Extension(admin): Extension<AdminPrincipal>,
    Path(raw_id): Path<String>,
) -> CatalogResult<Json<MessageResponse>>
where
    R: BikeRepository + Clone + Send + Sync + 'static,
{
    let bike_id = parse_id(&raw_id)?;

    let bike = state
        .repo
        .delete(bike_id)
        .await?
        .ok_or(CatalogError::BikeNotFound)?;

    tracing::info!(bike_id = %bike.bike_id, admin_id = %admin.admin_id, "Bike deleted");

    Ok(Json(MessageResponse {
        message: "Bike deleted successfully",
    }))
}
