//! Checkout

pub mod errors;
mod ledger;
pub mod models;
pub mod service;

pub use errors::CheckoutServiceError;
pub use service::*;
