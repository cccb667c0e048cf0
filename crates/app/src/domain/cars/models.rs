//! Car Models

use std::collections::BTreeMap;

use jiff::Timestamp;
use serde_json::Value;

use crate::uuids::TypedUuid;

/// Car UUID
pub type CarUuid = TypedUuid<Car>;

/// Descriptive fields carried alongside a car (price, image, ...).
pub type CarDetails = BTreeMap<String, Value>;

/// Field names owned by the car record itself; they can never appear in [`CarDetails`].
pub const RESERVED_FIELDS: [&str; 5] = ["uuid", "name", "stock", "created_at", "updated_at"];

/// Car Model
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub uuid: CarUuid,
    pub name: String,
    pub stock: u64,
    pub details: CarDetails,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// New Car Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewCar {
    pub uuid: CarUuid,
    pub name: String,
    pub stock: u64,
    pub details: CarDetails,
}

impl NewCar {
    /// Builds a new car, dropping any detail that shadows a record field.
    #[must_use]
    pub fn new(name: impl Into<String>, stock: u64, mut details: CarDetails) -> Self {
        details.retain(|key, _| !RESERVED_FIELDS.contains(&key.as_str()));

        Self {
            uuid: CarUuid::new(),
            name: name.into(),
            stock,
            details,
        }
    }
}
