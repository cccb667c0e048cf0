//! Checkout service errors.

use thiserror::Error;

use crate::domain::carts::CartsServiceError;

#[derive(Debug, Error)]
pub enum CheckoutServiceError {
    #[error("missing required data")]
    MissingRequiredData,

    #[error("product not specified")]
    MissingProduct,

    #[error("car not found: {0}")]
    NotFound(String),

    #[error("insufficient stock for {name}: {stock} available")]
    InsufficientStock { name: String, stock: u64 },

    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}

impl From<CartsServiceError> for CheckoutServiceError {
    fn from(error: CartsServiceError) -> Self {
        match error {
            CartsServiceError::MissingProduct => Self::MissingProduct,
        }
    }
}
