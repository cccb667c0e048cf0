//! Errors

use salvo::http::StatusError;
use tracing::error;

use autos_app::domain::checkout::CheckoutServiceError;

pub(crate) const MISSING_REQUIRED_DATA: &str = "Nombre, correo y carrito son obligatorios";
pub(crate) const MISSING_PRODUCT: &str = "Producto no especificado";
pub(crate) const STOCK_UPDATE_FAILED: &str = "Error al actualizar el stock de los productos";

pub(crate) fn into_status_error(error: CheckoutServiceError) -> StatusError {
    match error {
        CheckoutServiceError::MissingRequiredData => {
            StatusError::bad_request().brief(MISSING_REQUIRED_DATA)
        }
        CheckoutServiceError::MissingProduct => StatusError::bad_request().brief(MISSING_PRODUCT),
        CheckoutServiceError::NotFound(name) => {
            StatusError::not_found().brief(format!("Auto no encontrado: {name}"))
        }
        CheckoutServiceError::InsufficientStock { name, stock } => StatusError::bad_request()
            .brief(format!(
                "Stock insuficiente para {name}. Stock actual: {stock}"
            )),
        CheckoutServiceError::Sql(source) => {
            error!("failed to update stock: {source}");

            StatusError::internal_server_error().brief(STOCK_UPDATE_FAILED)
        }
    }
}
