//! Errors

use salvo::http::StatusError;

use autos_app::domain::carts::CartsServiceError;

pub(crate) const MISSING_PRODUCT: &str = "Producto no especificado";

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::MissingProduct => StatusError::bad_request().brief(MISSING_PRODUCT),
    }
}
