//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//! Operations addressing a single row return `None` when no row matched.

use kernel::id::BikeId;

use crate::domain::entity::bike::{Bike, BikeSpec};
use crate::error::CatalogResult;

/// Bike listing repository trait
#[trait_variant::make(BikeRepository: Send)]
pub trait LocalBikeRepository {
    /// Insert a listing and return it with its assigned id
    async fn create(&self, spec: &BikeSpec) -> CatalogResult<Bike>;

    /// All listings, in store order
    async fn list(&self) -> CatalogResult<Vec<Bike>>;

    /// Find a listing by id
    async fn find_by_id(&self, bike_id: BikeId) -> CatalogResult<Option<Bike>>;

    /// Replace every field of a listing
    async fn update(&self, bike_id: BikeId, spec: &BikeSpec) -> CatalogResult<Option<Bike>>;

    /// Delete a listing, returning the removed row
    async fn delete(&self, bike_id: BikeId) -> CatalogResult<Option<Bike>>;
}
