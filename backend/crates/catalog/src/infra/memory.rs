//! In-memory repository for tests

use std::sync::{Arc, Mutex, MutexGuard};

use kernel::id::BikeId;

use crate::domain::entity::bike::{Bike, BikeSpec};
use crate::domain::repository::BikeRepository;
use crate::error::CatalogResult;

#[derive(Default)]
struct Table {
    last_id: i32,
    rows: Vec<Bike>,
}

/// Bike store backed by a `Vec`, assigning ids like a `SERIAL` column
#[derive(Clone, Default)]
pub struct InMemoryBikeRepository {
    table: Arc<Mutex<Table>>,
}

impl InMemoryBikeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored listings
    pub fn len(&self) -> usize {
        self.table().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn table(&self) -> MutexGuard<'_, Table> {
        self.table.lock().unwrap_or_else(|p| p.into_inner())
    }
}

impl BikeRepository for InMemoryBikeRepository {
    async fn create(&self, spec: &BikeSpec) -> CatalogResult<Bike> {
        let mut table = self.table();
        table.last_id += 1;
        let bike = Bike {
            bike_id: BikeId::new(table.last_id),
            spec: spec.clone(),
        };
        table.rows.push(bike.clone());
        Ok(bike)
    }

    async fn list(&self) -> CatalogResult<Vec<Bike>> {
        Ok(self.table().rows.clone())
    }

    async fn find_by_id(&self, bike_id: BikeId) -> CatalogResult<Option<Bike>> {
        Ok(self
            .table()
            .rows
            .iter()
            .find(|b| b.bike_id == bike_id)
            .cloned())
    }

    async fn update(&self, bike_id: BikeId, spec: &BikeSpec) -> CatalogResult<Option<Bike>> {
        let mut table = self.table();
        Ok(table
            .rows
            .iter_mut()
            .find(|b| b.bike_id == bike_id)
            .map(|bike| {
                bike.spec = spec.clone();
                bike.clone()
            }))
    }

    async fn delete(&self, bike_id: BikeId) -> CatalogResult<Option<Bike>> {
        let mut table = self.table();
        let position = table.rows.iter().position(|b| b.bike_id == bike_id);
        Ok(position.map(|i| table.rows.remove(i)))
    }
}
