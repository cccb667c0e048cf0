//! Carts service errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartsServiceError {
    #[error("product not specified")]
    MissingProduct,
}
