//! Get Cart Handler

use salvo::prelude::*;
use serde_json::Value;

use autos_app::domain::carts::models::ProductDescriptor;

use crate::extensions::*;

/// Get Cart Handler
///
/// Returns the products in the cart, in the order they were added.
#[endpoint(tags("carts"), summary = "Get Cart")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<Value>>, StatusError> {
    let state = depot.state_or_500()?;

    let items = state.app.carts.get_cart().await;

    Ok(Json(
        items
            .into_iter()
            .map(ProductDescriptor::into_value)
            .collect(),
    ))
}
