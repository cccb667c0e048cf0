//! Clear Cart Handler

use salvo::prelude::*;

use crate::{extensions::*, messages::MessageResponse};

/// Clear Cart Handler
#[endpoint(tags("carts"), summary = "Empty Cart")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.state_or_500()?;

    state.app.carts.clear_cart().await;

    Ok(Json(MessageResponse::new("El carrito ha sido vaciado")))
}
