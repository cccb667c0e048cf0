//! Confirm Purchase Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use autos_app::domain::checkout::models::{NewPurchase, PurchaseLine};

use crate::{
    checkout::errors::into_status_error, extensions::*, messages::MessageResponse,
    observability::observe_checkout,
};

/// Confirm Purchase Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ConfirmPurchaseRequest {
    /// Buyer name
    pub nombre: Option<String>,

    /// Buyer email
    pub correo: Option<String>,

    /// Cars being bought, as an array of [`CartLineRequest`]
    ///
    /// Anything other than an array of well-formed lines is reported as missing data.
    #[salvo(schema(value_type = Option<Vec<CartLineRequest>>))]
    pub carrito: Option<Value>,
}

/// Cart Line
///
/// `cantidad` must be a JSON integer. A fractional amount such as `1.5` makes
/// the line malformed rather than being rounded.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineRequest {
    /// Catalog name of the car
    pub name: String,

    /// Units to buy; a missing or zero amount buys one and the sign is ignored
    pub cantidad: Option<i64>,
}

impl From<CartLineRequest> for PurchaseLine {
    fn from(line: CartLineRequest) -> Self {
        PurchaseLine::new(line.name, line.cantidad)
    }
}

/// Reads the submitted cart, yielding `None` unless it is an array of valid lines.
fn cart_lines(carrito: Option<Value>) -> Option<Vec<PurchaseLine>> {
    let Some(Value::Array(lines)) = carrito else {
        return None;
    };

    lines
        .into_iter()
        .map(|line| {
            serde_json::from_value::<CartLineRequest>(line)
                .ok()
                .map(PurchaseLine::from)
        })
        .collect()
}

/// Confirm Purchase Handler
///
/// Takes every line out of stock in a single transaction and empties the cart.
#[endpoint(
    tags("checkout"),
    summary = "Confirm Purchase",
    responses(
        (status_code = StatusCode::OK, description = "Purchase confirmed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing fields or insufficient stock"),
        (status_code = StatusCode::NOT_FOUND, description = "Unknown car"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Stock update failed"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ConfirmPurchaseRequest>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let request = json.into_inner();

    let new_purchase =
        NewPurchase::new(request.nombre, request.correo, cart_lines(request.carrito));

    let confirmed = match new_purchase {
        Ok(purchase) => state.app.checkout.confirm_purchase(purchase).await,
        Err(invalid) => Err(invalid),
    };

    observe_checkout(&confirmed);

    confirmed.map_err(into_status_error)?;

    Ok(Json(MessageResponse::new(
        "Compra confirmada, stock actualizado y carrito reiniciado",
    )))
}
