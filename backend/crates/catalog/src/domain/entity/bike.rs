//! Bike Listing Entity

use kernel::id::BikeId;
use serde::Serialize;

/// The seven caller-supplied fields of a listing
///
/// Create and update both take a complete spec; there are no partial
/// updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BikeSpec {
    /// Image URL
    pub url: String,
    pub name: String,
    pub model: String,
    pub engine: String,
    pub fuel: String,
    pub color: String,
    pub warranty: String,
}

/// Stored bike listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bike {
    /// Store-assigned identifier
    pub bike_id: BikeId,
    pub spec: BikeSpec,
}
