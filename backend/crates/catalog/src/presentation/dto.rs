//! API DTOs (Data Transfer Objects)

use kernel::id::BikeId;
use kernel::validation::{MissingField, require};
use serde::{Deserialize, Serialize};

use crate::domain::entity::bike::{Bike, BikeSpec};

/// Create / update request body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BikeRequest {
    pub url: Option<String>,
    pub name: Option<String>,
    pub model: Option<String>,
    pub engine: Option<String>,
    pub fuel: Option<String>,
    pub color: Option<String>,
    pub warranty: Option<String>,
}

impl BikeRequest {
    /// Require all seven fields to be present and non-empty
    pub fn into_spec(self) -> Result<BikeSpec, MissingField> {
        Ok(BikeSpec {
            url: require("url", self.url)?,
            name: require("name", self.name)?,
            model: require("model", self.model)?,
            engine: require("engine", self.engine)?,
            fuel: require("fuel", self.fuel)?,
            color: require("color", self.color)?,
            warranty: require("warranty", self.warranty)?,
        })
    }
}

/// A listing as returned to callers: the row with its id
#[derive(Debug, Clone, Serialize)]
pub struct BikeResponse {
    pub id: BikeId,
    #[serde(flatten)]
    pub spec: BikeSpec,
}

impl From<Bike> for BikeResponse {
    fn from(bike: Bike) -> Self {
        Self {
            id: bike.bike_id,
            spec: bike.spec,
        }
    }
}

/// Create / update response
#[derive(Debug, Clone, Serialize)]
pub struct BikeMutationResponse {
    pub message: &'static str,
    pub bike: BikeResponse,
}

/// Delete response
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
