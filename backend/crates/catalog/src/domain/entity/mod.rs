//! Entity Module

pub mod bike;

pub use bike::{Bike, BikeSpec};
