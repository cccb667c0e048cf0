//! Buy Product Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{checkout::errors::into_status_error, extensions::*, messages::MessageResponse};

/// Buy Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BuyProductRequest {
    /// The product being bought
    pub producto: Option<Value>,
}

/// Buy Product Handler
///
/// Acknowledges a purchase without reserving stock.
#[endpoint(
    tags("checkout"),
    summary = "Buy Product",
    responses(
        (status_code = StatusCode::OK, description = "Purchase acknowledged"),
        (status_code = StatusCode::BAD_REQUEST, description = "Product missing"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<BuyProductRequest>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let product = state
        .app
        .checkout
        .buy_product(json.into_inner().producto)
        .await
        .map_err(into_status_error)?;

    Ok(Json(MessageResponse::new(format!(
        "Has comprado el producto: {product}"
    ))))
}
