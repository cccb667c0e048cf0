//! Car Index Handler

use std::collections::BTreeMap;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use autos_app::domain::cars::models::Car;

use crate::extensions::*;

/// Car Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CarResponse {
    /// The unique identifier of the car
    pub uuid: Uuid,

    /// Catalog name, used to reference the car at checkout
    pub name: String,

    /// Units available for sale
    pub stock: u64,

    /// Descriptive fields such as `price` and `image`
    #[serde(flatten)]
    #[salvo(schema(value_type = Object))]
    pub details: BTreeMap<String, Value>,

    /// The date and time the car was created
    pub created_at: String,

    /// The date and time the car was last updated
    pub updated_at: String,
}

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        Self {
            uuid: car.uuid.into_uuid(),
            name: car.name,
            stock: car.stock,
            details: car.details,
            created_at: car.created_at.to_string(),
            updated_at: car.updated_at.to_string(),
        }
    }
}

/// Car Index Handler
///
/// Returns every car in the catalog.
#[endpoint(
    tags("cars"),
    summary = "List Cars",
    responses(
        (status_code = StatusCode::OK, description = "Catalog"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Catalog unavailable"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<CarResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let cars = state
        .app
        .cars
        .list_cars()
        .await
        .or_500("Error al obtener los autos")?;

    Ok(Json(cars.into_iter().map(Into::into).collect()))
}
