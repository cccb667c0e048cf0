//! Autos Domain Concerns

pub mod cars;
pub mod carts;
pub mod checkout;
