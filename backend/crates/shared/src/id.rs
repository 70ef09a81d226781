//! Common ID Types
//!
//! Type-safe wrappers around the integer keys the store assigns.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Generic typed ID wrapper over a store-assigned `SERIAL` key
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type BikeId = Id<markers::Bike>;
///
/// let id = BikeId::new(7);
/// assert_eq!(id.get(), 7);
/// ```
pub struct Id<T> {
    value: i32,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Wrap a raw key (e.g. read back from the store)
    pub const fn new(value: i32) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Parse a path segment into an ID
    ///
    /// Anything that is not a base-10 `i32` yields `None`; callers treat
    /// that the same as a key with no matching row.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<i32>().ok().map(Self::new)
    }

    /// Get the raw key for binding into queries
    pub const fn get(&self) -> i32 {
        self.value
    }
}

// Manual impls: derives would require the marker type to implement them too.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i32> for Id<T> {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl<T> From<Id<T>> for i32 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i32::deserialize(deserializer).map(Self::new)
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for administrator IDs
    pub struct Admin;

    /// Marker for bike listing IDs
    pub struct Bike;

    /// Marker for contact submission IDs
    pub struct ContactSubmission;
}

/// Type aliases for common IDs
pub type AdminId = Id<markers::Admin>;
pub type BikeId = Id<markers::Bike>;
pub type SubmissionId = Id<markers::ContactSubmission>;
